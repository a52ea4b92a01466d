//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's
//! state extraction. All fields are cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::service::country::CountryService;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests, configured without redirects.
    pub http_client: reqwest::Client,

    /// Dial code lookup with its in-memory cache.
    pub country_service: CountryService,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        country_service: CountryService,
    ) -> Self {
        Self {
            db,
            http_client,
            country_service,
        }
    }
}
