//! Pagination over fully materialized, id-ordered lists.
//!
//! Every question listing surface serves fixed windows of ten items; the
//! window is cut from the complete result list rather than pushed into the
//! query, so out-of-range pages simply come back empty.

use crate::errors::ServiceError;

/// Items per page on every question listing surface.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Validate a 1-based page number taken from the query string.
/// Absent means the first page; zero and negatives are rejected.
pub fn parse_page(raw: Option<i64>) -> Result<u32, ServiceError> {
    let page = raw.unwrap_or(1);
    if page < 1 {
        return Err(ServiceError::Invalid(format!("page must be >= 1, got {page}")));
    }
    Ok(page.min(u32::MAX as i64) as u32)
}

/// The `[(page-1)*10, page*10)` window of `items`; empty when out of range.
pub fn window<T>(items: &[T], page: u32) -> &[T] {
    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
