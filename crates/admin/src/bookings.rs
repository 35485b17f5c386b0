//! Booking administration: search, filter and payment status changes.

use tracing::{debug, info};

use beauty_store_core::{Booking, BookingId, BookingPaymentStatus, Page, Store, paginate};
use beauty_store_storefront::db::Collection;

use crate::error::AdminError;
use crate::search::{RecordFilter, any_contains};

/// Filter over bookings. The date range applies to the appointment date.
pub type BookingFilter = RecordFilter<BookingPaymentStatus>;

/// Back-office view of bookings.
pub struct BookingAdmin<'a> {
    bookings: Collection<'a, Booking>,
}

impl<'a> BookingAdmin<'a> {
    #[must_use]
    pub fn new(store: &'a dyn Store) -> Self {
        Self {
            bookings: Collection::new(store),
        }
    }

    /// Bookings matching `filter`, in stored order, one page at a time.
    ///
    /// The query matches booking ID, customer name, email and service
    /// title, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Store` if the document is unreadable.
    pub fn search(&self, filter: &BookingFilter) -> Result<Page<Booking>, AdminError> {
        let needle = filter.needle();
        let matches: Vec<Booking> = self
            .bookings
            .list()?
            .into_iter()
            .filter(|booking| {
                needle.as_deref().is_none_or(|needle| {
                    any_contains(
                        needle,
                        &[
                            booking.id.as_str(),
                            &booking.full_name(),
                            &booking.email,
                            &booking.service,
                        ],
                    )
                })
            })
            .filter(|booking| filter.status_matches(&booking.payment_status))
            .filter(|booking| filter.in_range(booking.date))
            .collect();
        debug!(matches = matches.len(), "Booking search");
        Ok(paginate(&matches, filter.page, filter.per_page))
    }

    /// One booking by ID.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn get(&self, id: &BookingId) -> Result<Booking, AdminError> {
        self.bookings
            .get(id)?
            .ok_or_else(|| AdminError::NotFound(format!("booking {id}")))
    }

    /// Set a booking's payment status. Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` for an unknown ID.
    pub fn set_status(
        &self,
        id: &BookingId,
        status: BookingPaymentStatus,
    ) -> Result<Booking, AdminError> {
        let booking = self
            .bookings
            .update(id, |booking| booking.payment_status = status)?;
        info!(booking_id = %booking.id, status = %status, "Booking status updated");
        Ok(booking)
    }
}
