//! Service booking submission and customer-side booking views.

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

use beauty_store_core::{
    Booking, BookingId, BookingPaymentStatus, PaymentMethod, Service, ServiceId, Store,
};

use super::validate::{self, FieldError};
use crate::db::{Collection, RepositoryError};
use crate::ids;

const FIRST_SLOT_MINUTES: u32 = 9 * 60;
const LAST_SLOT_MINUTES: u32 = 17 * 60 + 30;
const SLOT_STEP_MINUTES: usize = 30;

/// Errors from booking operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// A form field was missing or malformed.
    #[error("invalid booking details: {0}")]
    Validation(#[from] FieldError),

    /// The requested service is not in the catalog.
    #[error("unknown service: {0}")]
    UnknownService(ServiceId),

    /// Store or record lookup failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Bookable start times, `09:00` to `17:30` every half hour.
#[must_use]
pub fn time_slots() -> Vec<String> {
    (FIRST_SLOT_MINUTES..=LAST_SLOT_MINUTES)
        .step_by(SLOT_STEP_MINUTES)
        .map(|minutes| format!("{:02}:{:02}", minutes / 60, minutes % 60))
        .collect()
}

/// Details entered on the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub service_id: ServiceId,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub county: Option<String>,
    pub postcode: String,
    pub comments: Option<String>,
    pub payment_method: PaymentMethod,
    /// Receipt attached while booking, for bank transfers.
    pub receipt_url: Option<String>,
}

/// Booking placement over a shared store.
pub struct BookingService<'a> {
    store: &'a dyn Store,
}

impl<'a> BookingService<'a> {
    /// Create a booking service.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    fn bookings(&self) -> Collection<'a, Booking> {
        Collection::new(self.store)
    }

    /// Validate and record a booking.
    ///
    /// Title and price are taken from the catalog entry for the service.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::UnknownService` if the service does not exist
    /// and `BookingError::Validation` for a missing or past date, an unknown
    /// time slot, or a malformed customer field. Nothing is written on error.
    pub fn submit(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let service = Collection::<Service>::new(self.store)
            .get(&request.service_id)?
            .ok_or_else(|| BookingError::UnknownService(request.service_id.clone()))
            .inspect_err(|e| warn!(error = %e, "Booking rejected"))?;

        let fields = validate_request(&request, Utc::now().date_naive())
            .inspect_err(|e| warn!(service_id = %service.id, error = %e, "Booking rejected"))?;

        let bookings = self.bookings();
        let existing = bookings.list()?;
        let id = ids::unique_reference(ids::BOOKING_PREFIX, |code| {
            existing.iter().any(|booking| booking.id.as_str() == code)
        });

        let booking = bookings.insert(Booking {
            id: BookingId::new(id),
            service: service.title,
            service_id: service.id,
            date: fields.date,
            time: fields.time,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            county: validate::optional(request.county),
            postcode: fields.postcode,
            comments: validate::optional(request.comments),
            price: service.price,
            payment_method: request.payment_method,
            payment_status: BookingPaymentStatus::initial(request.payment_method),
            receipt_url: validate::optional(request.receipt_url),
            created_at: Utc::now(),
        })?;

        info!(
            booking_id = %booking.id,
            service_id = %booking.service_id,
            date = %booking.date,
            time = %booking.time,
            payment_status = %booking.payment_status,
            "Booking placed"
        );
        Ok(booking)
    }

    /// Attach a payment receipt and put the booking back to `pending`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the booking does not exist.
    pub fn upload_receipt(
        &self,
        id: &BookingId,
        receipt_url: &str,
    ) -> Result<Booking, BookingError> {
        let receipt_url = validate::required("receiptUrl", receipt_url)?.to_owned();
        let booking = self.bookings().update(id, |booking| {
            booking.receipt_url = Some(receipt_url);
            booking.payment_status = BookingPaymentStatus::Pending;
        })?;
        info!(booking_id = %booking.id, "Booking receipt uploaded");
        Ok(booking)
    }

    /// Bookings made with `email`, soonest appointment first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the document is unreadable.
    pub fn bookings_for(&self, email: &str) -> Result<Vec<Booking>, BookingError> {
        let mut bookings: Vec<Booking> = self
            .bookings()
            .list()?
            .into_iter()
            .filter(|booking| booking.email.eq_ignore_ascii_case(email.trim()))
            .collect();
        bookings.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));
        Ok(bookings)
    }
}

#[derive(Debug)]
struct ValidFields {
    date: NaiveDate,
    time: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    address: String,
    postcode: String,
}

fn validate_request(request: &BookingRequest, today: NaiveDate) -> Result<ValidFields, FieldError> {
    let date = request
        .date
        .ok_or_else(|| FieldError::new("date", "is required"))?;
    if date < today {
        return Err(FieldError::new("date", "must not be in the past"));
    }
    let time = validate::required("time", &request.time)?;
    if !time_slots().iter().any(|slot| slot == time) {
        return Err(FieldError::new("time", format!("{time} is not a bookable slot")));
    }

    Ok(ValidFields {
        date,
        time: time.to_owned(),
        first_name: validate::length("firstName", &request.first_name, 2, 50)?.to_owned(),
        last_name: validate::length("lastName", &request.last_name, 2, 50)?.to_owned(),
        email: validate::email("email", &request.email)?.into_inner(),
        phone: validate::length("phone", &request.phone, 10, 20)?.to_owned(),
        address: validate::length("address", &request.address, 5, 200)?.to_owned(),
        postcode: validate::length("postcode", &request.postcode, 5, 10)?.to_owned(),
    })
}
