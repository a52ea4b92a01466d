//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Enumerated columns are parsed into
//! their typed form on the way in, so services never handle raw strings.

pub mod country;
pub mod notification;
pub mod payment;
pub mod site;
pub mod stats;
pub mod user;

use crate::server::error::AppError;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Parameters for paginated queries.
#[derive(Debug, Clone, Copy)]
pub struct PageParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of rows per page.
    pub per_page: u64,
}

impl PageParam {
    /// Validates pagination taken from a query string.
    ///
    /// `per_page` is clamped to `1..=MAX_PER_PAGE`. The row offset `page * per_page` must
    /// fit into a signed 64-bit SQL integer.
    ///
    /// # Returns
    /// - `Ok(PageParam)` - Page with a bounded size
    /// - `Err(AppError::BadRequest)` - Page number is too large
    pub fn from_query(page: u64, per_page: u64) -> Result<Self, AppError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        page.checked_mul(per_page)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::BadRequest("Page number is out of range".to_string()))?;

        Ok(Self { page, per_page })
    }
}

/// A page of domain models with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total number of rows across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Builds a page, deriving `total_pages` from the row total.
    pub fn new(items: Vec<T>, total: u64, param: PageParam) -> Self {
        let total_pages = if param.per_page == 0 {
            0
        } else {
            total.div_ceil(param.per_page)
        };

        Self {
            items,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        }
    }

    /// Converts every item and wraps the page into its DTO envelope.
    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> crate::model::api::PaginatedDto<D> {
        crate::model::api::PaginatedDto {
            items: self.items.into_iter().map(convert).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
