use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public counters shown on the home page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatsDto {
    pub sites: u64,
    pub guides: u64,
    pub visitors: u64,
}

/// Admin dashboard chart values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummaryDto {
    pub total_users: u64,
    pub total_sites: u64,
    pub total_visits: u64,
    pub total_payments: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
