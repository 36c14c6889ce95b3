//! Page arithmetic for the post listing.

use crate::error::DomainError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u64 = 10;
/// Larger requested page sizes are clamped down to this.
pub const MAX_LIMIT: u64 = 20;
/// Pages are 1-indexed.
pub const DEFAULT_PAGE: u64 = 1;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u64,
    page: u64,
}

impl PageRequest {
    /// Apply defaults and the `MAX_LIMIT` clamp.
    ///
    /// A zero limit or page has no meaningful offset and is rejected.
    pub fn new(limit: Option<u64>, page: Option<u64>) -> Result<Self, DomainError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let page = page.unwrap_or(DEFAULT_PAGE);

        if limit == 0 {
            return Err(DomainError::validation("limit must be greater than 0"));
        }
        if page == 0 {
            return Err(DomainError::validation("page must be greater than 0"));
        }

        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Build the metadata for this request against `total_count` rows.
    ///
    /// Returns `None` when the page lies past the last one. With zero rows
    /// there are zero pages, so even page 1 is out of range.
    pub fn meta(&self, total_count: u64) -> Option<PageMeta> {
        let total_pages = total_count.div_ceil(self.limit);
        if self.page > total_pages {
            return None;
        }

        Some(PageMeta {
            current_page: self.page,
            total_pages,
            total_count,
            limit: self.limit,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub limit: u64,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}
