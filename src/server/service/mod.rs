//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, approval rules and self-protection checks
//! - **Orchestration**: Coordinating repositories and emitting notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **External Data**: Fetching and caching the country dial-code list

pub mod assistant;
pub mod auth;
pub mod country;
pub mod notification;
pub mod payment;
pub mod researcher;
pub mod site;
pub mod stats;
pub mod user;
