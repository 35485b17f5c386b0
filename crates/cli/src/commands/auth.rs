//! Account commands: signup, login, logout and the signed-in user's history.

use clap::Subcommand;

use beauty_store_storefront::{AuthService, BookingService, CheckoutService};

use super::print_json;
use crate::Context;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account
    Signup {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        name: String,
    },
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
pub enum AccountView {
    /// Orders placed with the signed-in email, newest first
    Orders,
    /// Bookings made with the signed-in email
    Bookings,
}

/// Run an authentication command.
///
/// # Errors
///
/// Returns an error for bad credentials, a duplicate email or a store failure.
pub fn run(ctx: &Context, action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let auth = AuthService::new(&ctx.store);
    match action {
        AuthAction::Signup {
            email,
            password,
            name,
        } => {
            let user = auth.signup(&email, &password, &name)?;
            tracing::info!("Account created for {} ({})", user.email, user.role);
        }
        AuthAction::Login { email, password } => {
            let session = auth.login(&email, &password)?;
            print_json(&session)?;
        }
        AuthAction::Logout => auth.logout()?,
        AuthAction::Whoami => print_json(&auth.current_user()?)?,
    }
    Ok(())
}

/// Show the signed-in customer's orders or bookings.
///
/// # Errors
///
/// Returns an error if nobody is signed in.
pub fn account(ctx: &Context, view: AccountView) -> Result<(), Box<dyn std::error::Error>> {
    let session = AuthService::new(&ctx.store)
        .current_user()?
        .ok_or("not signed in")?;
    let email = session.email.as_str();
    match view {
        AccountView::Orders => {
            let orders =
                CheckoutService::new(&ctx.store, ctx.config.shipping_fee).orders_for(email)?;
            print_json(&orders)?;
        }
        AccountView::Bookings => {
            print_json(&BookingService::new(&ctx.store).bookings_for(email)?)?;
        }
    }
    Ok(())
}
