//! Pagination types for list operations.

use crate::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Pages are 1-indexed. Values are kept signed so that out-of-range input
/// survives deserialization and is rejected by [`validate`](Self::validate)
/// instead of being silently reshaped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page: i64,
    /// The number of items per page.
    pub limit: i64,
}

impl PageRequest {
    /// The default page number.
    pub const DEFAULT_PAGE: i64 = 1;
    /// The default page size.
    pub const DEFAULT_LIMIT: i64 = 5;

    /// Creates a new page request.
    #[must_use]
    pub const fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }

    /// Validates the request.
    ///
    /// `page` is checked before `limit`; the first failure is reported.
    pub fn validate(&self) -> RosterResult<()> {
        if self.page <= 0 {
            return Err(RosterError::validation("page must be a positive integer"));
        }
        if self.limit <= 0 {
            return Err(RosterError::validation("limit must be a positive integer"));
        }
        Ok(())
    }

    /// Returns the offset for database queries.
    ///
    /// Only meaningful for a validated request.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of results together with the collection's total cardinality.
///
/// `total` is the count of all records, not the window length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in this window.
    pub items: Vec<T>,
    /// The total number of records in the collection.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Maps the page items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Returns true if the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
