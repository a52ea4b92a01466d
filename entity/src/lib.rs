//! SeaORM entity models for the portal database.

pub mod prelude;

pub mod notification;
pub mod payment;
pub mod site;
pub mod user;
