//! Checkout and receipt upload commands.

use clap::{Args, Subcommand};

use beauty_store_core::{BookingId, CustomerInfo, OrderId, PaymentMethod};
use beauty_store_storefront::{BookingService, CheckoutRequest, CheckoutService};

use super::print_json;
use crate::Context;

#[derive(Args)]
pub struct CheckoutArgs {
    /// Full name for delivery
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    address: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    postcode: String,
    /// bank-transfer, card, paypal or debit-card
    #[arg(long, default_value = "bank-transfer")]
    payment: PaymentMethod,
    /// Location of an uploaded payment receipt
    #[arg(long)]
    receipt: Option<String>,
}

#[derive(Subcommand)]
pub enum ReceiptTarget {
    /// Attach a receipt to an order
    Order {
        id: String,
        /// Location of the uploaded receipt
        url: String,
    },
    /// Attach a receipt to a booking
    Booking { id: String, url: String },
}

/// Place an order for the current cart and print it.
///
/// # Errors
///
/// Returns an error if the cart is empty or a field is invalid.
pub fn checkout(ctx: &Context, args: CheckoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let order = CheckoutService::new(&ctx.store, ctx.config.shipping_fee).checkout(
        CheckoutRequest {
            customer: CustomerInfo {
                full_name: args.name,
                email: args.email,
                phone: args.phone,
                address: args.address,
                city: args.city,
                postcode: args.postcode,
            },
            payment_method: args.payment,
            receipt_url: args.receipt,
        },
    )?;
    tracing::info!(
        "Order {} placed, total {}",
        order.id,
        order.total.display(ctx.config.currency)
    );
    print_json(&order)?;
    Ok(())
}

/// Attach a payment receipt to an order or booking.
///
/// # Errors
///
/// Returns an error if the record does not exist or the URL is blank.
pub fn receipt(ctx: &Context, target: ReceiptTarget) -> Result<(), Box<dyn std::error::Error>> {
    match target {
        ReceiptTarget::Order { id, url } => {
            let order = CheckoutService::new(&ctx.store, ctx.config.shipping_fee)
                .upload_receipt(&OrderId::new(id), &url)?;
            print_json(&order)?;
        }
        ReceiptTarget::Booking { id, url } => {
            let booking =
                BookingService::new(&ctx.store).upload_receipt(&BookingId::new(id), &url)?;
            print_json(&booking)?;
        }
    }
    Ok(())
}
