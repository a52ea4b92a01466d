//! Shared test setup for the portal backend.
//!
//! - `builder::TestBuilder` creates an in-memory SQLite database with the requested tables
//! - `context::TestContext` owns that database and an optional session stored in it
//! - `factory` inserts users, sites, notifications and payments with usable defaults
//! - `error::TestError` wraps failures during setup
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn approved_sites_are_public() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_portal_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let site = factory::site::SiteFactory::new(db).status("approved").build().await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
