//! Back-office commands.
//!
//! Everything except `create-user` requires an admin session
//! (`bs-cli auth login` with an admin account first).
//!
//! # Usage
//!
//! ```bash
//! # Bootstrap the first admin account
//! bs-cli admin create-user -e boss@example.com -p secret -n "Boss" -r admin
//!
//! bs-cli admin inventory add braided-wigs-1 --units 10
//! bs-cli admin bookings list --status pending --from 2026-11-01
//! bs-cli admin orders set-status ORD-7KQ2M approved
//! bs-cli admin sales
//! ```

use chrono::{NaiveDate, Utc};
use clap::{Args, Subcommand};

use beauty_store_admin::{
    BookingAdmin, BookingFilter, CategoryAdmin, GalleryAdmin, NewGalleryItem, NewProduct,
    NewService, OrderAdmin, OrderFilter, ProductAdmin, ProductPatch, RecordFilter, ServiceAdmin,
    ServicePatch, require_admin, sales,
    search::{BOOKINGS_PER_PAGE, ORDERS_PER_PAGE},
};
use beauty_store_core::{
    BookingId, BookingPaymentStatus, CategoryId, GalleryItemId, Money, OrderId,
    OrderPaymentStatus, ProductId, Role, ServiceId,
};
use beauty_store_storefront::AuthService;

use super::print_json;
use crate::Context;

#[derive(Subcommand)]
pub enum AdminAction {
    /// Create an account with an explicit role
    CreateUser {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        name: String,
        /// user or admin
        #[arg(short, long, default_value = "admin")]
        role: Role,
    },
    /// Manage shop products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Restock products and view restock history
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Manage bookable services
    Services {
        #[command(subcommand)]
        action: ServiceAction,
    },
    /// Manage service categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage the gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },
    /// Search bookings and set payment status
    Bookings {
        #[command(subcommand)]
        action: BookingAction,
    },
    /// Search orders and set payment status
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Revenue and order counts for today, the last 7 days and this year
    Sales,
}

#[derive(Subcommand)]
pub enum ProductAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: Money,
        #[arg(long)]
        category: String,
        #[arg(long)]
        image: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<Money>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum InventoryAction {
    /// Add stock to a product
    Add {
        id: String,
        #[arg(long)]
        units: u32,
    },
    /// Restock history, newest first
    History {
        id: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand)]
pub enum ServiceAction {
    List {
        #[arg(long)]
        category: Option<String>,
    },
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: Money,
    },
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<Money>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        /// Icon name (default: Star)
        #[arg(long)]
        icon: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args)]
pub struct GalleryFields {
    #[arg(long)]
    title: String,
    #[arg(long)]
    client: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    image: String,
    #[arg(long)]
    category: String,
}

impl From<GalleryFields> for NewGalleryItem {
    fn from(fields: GalleryFields) -> Self {
        Self {
            title: fields.title,
            client: fields.client,
            description: fields.description,
            image: fields.image,
            category: fields.category,
        }
    }
}

#[derive(Subcommand)]
pub enum GalleryAction {
    List,
    Add(GalleryFields),
    Update {
        id: u64,
        #[command(flatten)]
        fields: GalleryFields,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum BookingAction {
    /// Search with optional filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long)]
        status: Option<BookingPaymentStatus>,
    },
    /// Show one booking
    Show { id: String },
    /// Change the payment status
    SetStatus {
        id: String,
        status: BookingPaymentStatus,
    },
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// Search with optional filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long)]
        status: Option<OrderPaymentStatus>,
    },
    /// Show one order
    Show { id: String },
    /// Change the payment status
    SetStatus { id: String, status: OrderPaymentStatus },
}

#[derive(Args)]
pub struct FilterArgs {
    #[arg(short, long)]
    query: Option<String>,
    /// Earliest date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Latest date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
    #[arg(long, default_value_t = 1)]
    page: usize,
}

impl FilterArgs {
    fn into_filter<S>(self, status: Option<S>, per_page: usize) -> RecordFilter<S> {
        RecordFilter {
            query: self.query,
            status,
            start: self.from,
            end: self.to,
            page: self.page,
            per_page,
        }
    }
}

/// Run a back-office command.
///
/// # Errors
///
/// Returns an error if the session is not an admin or the operation fails.
pub fn run(ctx: &Context, action: AdminAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdminAction::CreateUser {
            email,
            password,
            name,
            role,
        } => {
            let user = AuthService::new(&ctx.store).create_user(&email, &password, &name, role)?;
            tracing::info!("Created {} account for {}", user.role, user.email);
            Ok(())
        }
        other => {
            let admin = require_admin(&ctx.store)?;
            tracing::debug!(admin = %admin.email, "Admin command");
            dispatch(ctx, other, admin.email.as_str())
        }
    }
}

fn dispatch(
    ctx: &Context,
    action: AdminAction,
    admin_email: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdminAction::CreateUser { .. } => {}
        AdminAction::Products { action } => products(ctx, action)?,
        AdminAction::Inventory { action } => inventory(ctx, action, admin_email)?,
        AdminAction::Services { action } => services(ctx, action)?,
        AdminAction::Categories { action } => categories(ctx, action)?,
        AdminAction::Gallery { action } => gallery(ctx, action)?,
        AdminAction::Bookings { action } => bookings(ctx, action)?,
        AdminAction::Orders { action } => orders(ctx, action)?,
        AdminAction::Sales => print_json(&sales::summary(&ctx.store, Utc::now())?)?,
    }
    Ok(())
}

fn products(ctx: &Context, action: ProductAction) -> Result<(), Box<dyn std::error::Error>> {
    let admin = ProductAdmin::new(&ctx.store);
    match action {
        ProductAction::List => print_json(&admin.list()?)?,
        ProductAction::Add {
            name,
            price,
            category,
            image,
        } => print_json(&admin.add(NewProduct {
            name,
            price,
            category,
            image,
        })?)?,
        ProductAction::Update {
            id,
            name,
            price,
            category,
            image,
        } => print_json(&admin.update(
            &ProductId::new(id),
            ProductPatch {
                name,
                price,
                category,
                image,
            },
        )?)?,
        ProductAction::Delete { id } => print_json(&admin.delete(&ProductId::new(id))?)?,
    }
    Ok(())
}

fn inventory(
    ctx: &Context,
    action: InventoryAction,
    added_by: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let admin = ProductAdmin::new(&ctx.store);
    match action {
        InventoryAction::Add { id, units } => {
            let product = admin.add_inventory(&ProductId::new(id), units, added_by)?;
            tracing::info!("{} now has {} in stock", product.name, product.stock);
        }
        InventoryAction::History { id, page } => {
            print_json(&admin.inventory_history(&ProductId::new(id), page)?)?;
        }
    }
    Ok(())
}

fn services(ctx: &Context, action: ServiceAction) -> Result<(), Box<dyn std::error::Error>> {
    let admin = ServiceAdmin::new(&ctx.store);
    match action {
        ServiceAction::List { category: None } => print_json(&admin.list()?)?,
        ServiceAction::List {
            category: Some(category),
        } => print_json(&admin.by_category(&CategoryId::new(category))?)?,
        ServiceAction::Add {
            title,
            description,
            category,
            price,
        } => print_json(&admin.add(NewService {
            title,
            description,
            category: CategoryId::new(category),
            price,
        })?)?,
        ServiceAction::Update {
            id,
            title,
            description,
            category,
            price,
        } => print_json(&admin.update(
            &ServiceId::new(id),
            ServicePatch {
                title,
                description,
                category: category.map(CategoryId::new),
                price,
            },
        )?)?,
        ServiceAction::Delete { id } => print_json(&admin.delete(&ServiceId::new(id))?)?,
    }
    Ok(())
}

fn categories(ctx: &Context, action: CategoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let admin = CategoryAdmin::new(&ctx.store);
    match action {
        CategoryAction::List => print_json(&admin.list()?)?,
        CategoryAction::Add { name, icon } => print_json(&admin.add(&name, icon.as_deref())?)?,
        CategoryAction::Update { id, name, icon } => print_json(&admin.update(
            &CategoryId::new(id),
            name.as_deref(),
            icon.as_deref(),
        )?)?,
        CategoryAction::Delete { id } => print_json(&admin.delete(&CategoryId::new(id))?)?,
    }
    Ok(())
}

fn gallery(ctx: &Context, action: GalleryAction) -> Result<(), Box<dyn std::error::Error>> {
    let admin = GalleryAdmin::new(&ctx.store);
    match action {
        GalleryAction::List => print_json(&admin.list()?)?,
        GalleryAction::Add(fields) => print_json(&admin.add(&fields.into())?)?,
        GalleryAction::Update { id, fields } => {
            print_json(&admin.update(GalleryItemId::new(id), &fields.into())?)?;
        }
        GalleryAction::Delete { id } => print_json(&admin.delete(GalleryItemId::new(id))?)?,
    }
    Ok(())
}

fn bookings(ctx: &Context, action: BookingAction) -> Result<(), Box<dyn std::error::Error>> {
    let admin = BookingAdmin::new(&ctx.store);
    match action {
        BookingAction::List { filter, status } => {
            let filter: BookingFilter = filter.into_filter(status, BOOKINGS_PER_PAGE);
            print_json(&admin.search(&filter)?)?;
        }
        BookingAction::Show { id } => print_json(&admin.get(&BookingId::new(id))?)?,
        BookingAction::SetStatus { id, status } => {
            print_json(&admin.set_status(&BookingId::new(id), status)?)?;
        }
    }
    Ok(())
}

fn orders(ctx: &Context, action: OrderAction) -> Result<(), Box<dyn std::error::Error>> {
    let admin = OrderAdmin::new(&ctx.store);
    match action {
        OrderAction::List { filter, status } => {
            let filter: OrderFilter = filter.into_filter(status, ORDERS_PER_PAGE);
            print_json(&admin.search(&filter)?)?;
        }
        OrderAction::Show { id } => print_json(&admin.get(&OrderId::new(id))?)?,
        OrderAction::SetStatus { id, status } => {
            print_json(&admin.set_status(&OrderId::new(id), status)?)?;
        }
    }
    Ok(())
}
