//! Search, status filter, date range and pagination for admin record lists.

use chrono::NaiveDate;

/// Bookings listed per page by default.
pub const BOOKINGS_PER_PAGE: usize = 10;
/// Orders listed per page by default.
pub const ORDERS_PER_PAGE: usize = 4;
/// Inventory history entries per page.
pub const INVENTORY_HISTORY_PER_PAGE: usize = 5;

/// Admin list filter. `None` fields do not filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter<S> {
    /// Case-insensitive substring of the record's searchable text.
    pub query: Option<String>,
    pub status: Option<S>,
    /// Inclusive lower bound on the record date.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound on the record date.
    pub end: Option<NaiveDate>,
    pub page: usize,
    pub per_page: usize,
}

impl<S> RecordFilter<S> {
    /// Unfiltered first page of `per_page` records.
    #[must_use]
    pub const fn new(per_page: usize) -> Self {
        Self {
            query: None,
            status: None,
            start: None,
            end: None,
            page: 1,
            per_page,
        }
    }

    /// Lowercased trimmed query, if any.
    #[must_use]
    pub fn needle(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty())
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl<S: PartialEq> RecordFilter<S> {
    /// Whether `status` passes the status filter.
    #[must_use]
    pub fn status_matches(&self, status: &S) -> bool {
        self.status.as_ref().is_none_or(|wanted| wanted == status)
    }
}

/// Whether any of `fields` contains `needle` (already lowercased).
#[must_use]
pub fn any_contains(needle: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
