//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into parameters, call the
//! service layer and convert the returned domain models back into DTOs.

use serde::Deserialize;

use crate::server::{error::AppError, model::PageParam};

pub mod assistant;
pub mod auth;
pub mod country;
pub mod health;
pub mod notification;
pub mod payment;
pub mod researcher;
pub mod site;
pub mod stats;
pub mod user;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub(crate) fn default_entries() -> u64 {
    10
}

impl PaginationParams {
    pub fn page_param(&self) -> Result<PageParam, AppError> {
        PageParam::from_query(self.page, self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::MAX_PER_PAGE;

    /// Tests query string pagination bounds.
    ///
    /// Expected: oversized pages are clamped, unreachable pages are a 400
    #[test]
    fn bounds_query_pagination() {
        let params = PaginationParams {
            page: 2,
            entries: u64::MAX,
        };
        let param = params.page_param().unwrap();
        assert_eq!(param.per_page, MAX_PER_PAGE);

        let params = PaginationParams {
            page: 9_223_372_036_854_775_807,
            entries: default_entries(),
        };
        assert!(matches!(params.page_param(), Err(AppError::BadRequest(_))));
    }
}
