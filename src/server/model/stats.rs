//! Aggregate counters for the home page and the admin dashboard.

use crate::model::stats::{AdminSummaryDto, StatsDto};

/// Public counters: approved sites, active guides, visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicStats {
    pub sites: u64,
    pub guides: u64,
    pub visitors: u64,
}

impl PublicStats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            sites: self.sites,
            guides: self.guides,
            visitors: self.visitors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdminSummary {
    pub total_users: u64,
    pub total_sites: u64,
    /// Completed payments, one per paid visit.
    pub total_visits: u64,
    /// Revenue from completed payments.
    pub total_payments: f64,
}

impl AdminSummary {
    pub fn into_dto(self) -> AdminSummaryDto {
        AdminSummaryDto {
            total_users: self.total_users,
            total_sites: self.total_sites,
            total_visits: self.total_visits,
            total_payments: self.total_payments,
        }
    }
}
