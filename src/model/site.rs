use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    Pending,
    Approved,
    Rejected,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SiteDto {
    pub site_id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub entrance_fee: f64,
    pub created_by: Option<i32>,
    pub agent_id: Option<i32>,
    pub status: SiteStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateSiteDto {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub entrance_fee: f64,
    pub agent_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateSiteStatusDto {
    pub status: SiteStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AssignAgentDto {
    pub agent_id: Option<i32>,
}

/// Entry of a researcher's recent contributions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SiteActivityDto {
    pub site_id: i32,
    pub name: String,
    pub status: SiteStatus,
    pub is_approved: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResearcherSummaryDto {
    pub total_sites: u64,
    pub pending: u64,
    pub approved: u64,
    pub recent_activity: Vec<SiteActivityDto>,
}
