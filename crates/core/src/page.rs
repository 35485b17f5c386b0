//! Pagination over in-memory lists.

use serde::Serialize;

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested (clamped to at least 1).
    pub page: usize,
    pub per_page: usize,
    /// Items across all pages.
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` into page `page` (1-based) of `per_page` entries.
///
/// Page 0 is treated as page 1; pages past the end are empty. A `per_page`
/// of 0 is treated as 1.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    Page {
        items: items
            .iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect(),
        page,
        per_page,
        total_items,
        total_pages: total_items.div_ceil(per_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=11).collect();
        let first = paginate(&items, 1, 4);
        assert_eq!(first.items, vec![1, 2, 3, 4]);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());

        let last = paginate(&items, 3, 4);
        assert_eq!(last.items, vec![9, 10, 11]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_paginate_edges() {
        let items = vec!['a', 'b'];
        assert_eq!(paginate(&items, 0, 10).page, 1);
        assert!(paginate(&items, 5, 10).items.is_empty());
        assert_eq!(paginate(&items, 1, 0).items, vec!['a']);
        assert_eq!(paginate::<char>(&[], 1, 10).total_pages, 0);
    }
}
