//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert rows
//! directly through SeaORM active models, bypassing repository validation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let researcher = factory::user::UserFactory::new(&db).role("researcher").build().await?;
//! let site = factory::site::SiteFactory::new(&db)
//!     .created_by(researcher.user_id)
//!     .status("pending")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `site` - Create site entities
//! - `notification` - Create notification entities
//! - `payment` - Create payment entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod helpers;
pub mod notification;
pub mod payment;
pub mod site;
pub mod user;

pub use notification::create_notification;
pub use payment::create_payment;
pub use site::create_site;
pub use user::create_user;
