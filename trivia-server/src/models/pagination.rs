//! Pagination over the question table

use serde::Deserialize;

/// Questions per page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// A page window. Page numbers are 1-indexed; anything below 1 is kept as-is
/// so the caller can answer it with an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self {
            page,
            per_page: QUESTIONS_PER_PAGE,
        }
    }

    /// True when the window can never contain rows (page 0 or negative).
    pub fn is_before_start(&self) -> bool {
        self.page < 1
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.per_page as i64)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Query parameters for `GET /questions`.
///
/// `page` is taken as a raw string: a value that does not parse as an
/// integer falls back to page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page)
    }
}
