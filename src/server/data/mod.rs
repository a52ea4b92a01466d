//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table. Repositories use SeaORM entity models internally and return domain models, parsing
//! enumerated columns at this boundary. All queries, inserts, updates, and deletes are
//! performed through these repositories.

pub mod notification;
pub mod payment;
pub mod site;
pub mod user;

#[cfg(test)]
mod test;
