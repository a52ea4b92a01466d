//! Site domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::site::{CreateSiteDto, SiteActivityDto, SiteDto, SiteStatus},
    server::{error::AppError, util::parse::parse_enum},
};

/// Tourism location awaiting or past approval.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub site_id: i32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub entrance_fee: f64,
    /// Researcher who contributed the site, if any.
    pub created_by: Option<i32>,
    /// Guide (site agent) assigned to the site, if any.
    pub agent_id: Option<i32>,
    pub status: SiteStatus,
    pub created_at: DateTime<Utc>,
}

impl Site {
    pub fn from_entity(entity: entity::site::Model) -> Result<Self, AppError> {
        Ok(Self {
            site_id: entity.site_id,
            name: entity.name,
            description: entity.description,
            location: entity.location,
            image_url: entity.image_url,
            entrance_fee: entity.entrance_fee,
            created_by: entity.created_by,
            agent_id: entity.agent_id,
            status: parse_enum("sites.status", entity.status, SiteStatus::parse)?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> SiteDto {
        SiteDto {
            site_id: self.site_id,
            name: self.name,
            description: self.description,
            location: self.location,
            image_url: self.image_url,
            entrance_fee: self.entrance_fee,
            created_by: self.created_by,
            agent_id: self.agent_id,
            status: self.status,
            created_at: self.created_at,
        }
    }

    pub fn into_activity_dto(self) -> SiteActivityDto {
        SiteActivityDto {
            site_id: self.site_id,
            name: self.name,
            status: self.status,
            is_approved: self.status == SiteStatus::Approved,
        }
    }
}

/// Parameters for inserting a site.
#[derive(Debug, Clone)]
pub struct CreateSiteParam {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: Option<String>,
    pub entrance_fee: f64,
    pub created_by: Option<i32>,
    pub agent_id: Option<i32>,
    pub status: SiteStatus,
}

impl CreateSiteParam {
    /// Builds insert parameters from the request body.
    ///
    /// # Arguments
    /// - `dto` - Request body
    /// - `created_by` - Contributing user
    /// - `status` - Initial approval status
    pub fn from_dto(dto: CreateSiteDto, created_by: Option<i32>, status: SiteStatus) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            location: dto.location.trim().to_string(),
            image_url: dto
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            entrance_fee: dto.entrance_fee,
            created_by,
            agent_id: dto.agent_id,
            status,
        }
    }
}

/// Per-status site counts for one researcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteCounts {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
}

/// Researcher dashboard summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearcherSummary {
    pub counts: SiteCounts,
    pub recent: Vec<Site>,
}

impl ResearcherSummary {
    pub fn into_dto(self) -> crate::model::site::ResearcherSummaryDto {
        crate::model::site::ResearcherSummaryDto {
            total_sites: self.counts.total,
            pending: self.counts.pending,
            approved: self.counts.approved,
            recent_activity: self
                .recent
                .into_iter()
                .map(Site::into_activity_dto)
                .collect(),
        }
    }
}
