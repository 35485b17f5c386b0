//! Service booking command.
//!
//! # Usage
//!
//! ```bash
//! bs-cli book --service bridal-makeup --date 2026-11-02 --time 10:30 \
//!     --first-name Grace --last-name Hopper --email grace@example.com \
//!     --phone "07700 900456" --address "12 Compiler Lane" --postcode "AB1 2CD"
//! ```

use chrono::NaiveDate;
use clap::Args;

use beauty_store_core::{PaymentMethod, ServiceId};
use beauty_store_storefront::{BookingRequest, BookingService};

use super::print_json;
use crate::Context;

#[derive(Args)]
pub struct BookArgs {
    /// Service ID, e.g. bridal-makeup
    #[arg(long)]
    service: String,
    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    /// Start time, 09:00 to 17:30 on the half hour
    #[arg(long)]
    time: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    county: Option<String>,
    #[arg(long)]
    postcode: String,
    #[arg(long)]
    comments: Option<String>,
    #[arg(long, default_value = "bank-transfer")]
    payment: PaymentMethod,
    /// Receipt for a bank transfer made in advance
    #[arg(long)]
    receipt: Option<String>,
}

/// Submit a booking and print it.
///
/// # Errors
///
/// Returns an error for an unknown service or an invalid field.
pub fn book(ctx: &Context, args: BookArgs) -> Result<(), Box<dyn std::error::Error>> {
    let booking = BookingService::new(&ctx.store).submit(BookingRequest {
        service_id: ServiceId::new(args.service),
        date: Some(args.date),
        time: args.time,
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        county: args.county,
        postcode: args.postcode,
        comments: args.comments,
        payment_method: args.payment,
        receipt_url: args.receipt,
    })?;
    tracing::info!(
        "Booking {} confirmed for {} at {}",
        booking.id,
        booking.date,
        booking.time
    );
    print_json(&booking)?;
    Ok(())
}
