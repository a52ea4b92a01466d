//! Data transfer objects shared by the API surface.
//!
//! These types define the JSON contract consumed by the dashboards and public pages.
//! Enumerations used in persisted columns also live here so that their string forms are
//! defined once for both serde and the database.

pub mod api;
pub mod assistant;
pub mod auth;
pub mod country;
pub mod notification;
pub mod payment;
pub mod site;
pub mod stats;
pub mod user;
