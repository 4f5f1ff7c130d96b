//! Listing/filter engine for the pickup-point activity report.
//!
//! Holds the pure parts of `GET /pvz`: date-window filtering, page clamping,
//! window selection, and the nested view types. Store implementations reuse
//! [`select_page`] so the in-memory and SQL paths agree on semantics.

use std::collections::HashSet;

use serde::Serialize;

use crate::pickup_point::PickupPoint;
use crate::product::Product;
use crate::reception::Reception;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Default page size when `limit` is absent or out of range.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: i64 = 30;

/// A clamped, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    /// Clamp raw query values: `page` to at least 1, `limit` to
    /// `[1, MAX_PAGE_LIMIT]` falling back to [`DEFAULT_PAGE_LIMIT`].
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = match limit {
            Some(l) if (1..=MAX_PAGE_LIMIT).contains(&l) => l,
            _ => DEFAULT_PAGE_LIMIT,
        };
        Self { page, limit }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Index of the first entry on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Apply the half-open window `[offset, offset + limit)` to `items`.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(0);
        items.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ---------------------------------------------------------------------------
// Date window
// ---------------------------------------------------------------------------

/// Inclusive window on reception open timestamps. A missing bound is open
/// on that side; with both bounds missing no filtering happens at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

impl DateRange {
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start.is_none_or(|s| ts >= s) && self.end.is_none_or(|e| ts <= e)
    }
}

/// Everything the listing query needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub range: DateRange,
    pub pagination: Pagination,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Pick the page of pickup points that match `filter`.
///
/// A point matches when the range is unbounded or at least one of its
/// receptions opened inside the range. Matches keep registration order
/// (stable for equal timestamps) before the page window is cut.
pub fn select_page(
    points: &[PickupPoint],
    receptions: &[Reception],
    filter: &ListFilter,
) -> Vec<PickupPoint> {
    let active: Option<HashSet<EntityId>> = if filter.range.is_unbounded() {
        None
    } else {
        Some(
            receptions
                .iter()
                .filter(|r| filter.range.contains(r.date_time))
                .map(|r| r.pvz_id)
                .collect(),
        )
    };

    let mut matched: Vec<PickupPoint> = points
        .iter()
        .filter(|p| active.as_ref().is_none_or(|ids| ids.contains(&p.id)))
        .cloned()
        .collect();
    matched.sort_by_key(|p| p.registration_date);

    filter.pagination.apply(matched)
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A reception with its full product sequence in append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceptionView {
    pub reception: Reception,
    pub products: Vec<Product>,
}

/// A pickup point with the receptions that satisfied the date filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupPointView {
    pub pvz: PickupPoint,
    pub receptions: Vec<ReceptionView>,
}
