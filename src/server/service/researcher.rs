//! Researcher dashboard summary.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::site::SiteRepository, error::AppError, model::site::ResearcherSummary,
};

/// Number of recent submissions shown on the dashboard.
const RECENT_ACTIVITY_LIMIT: u64 = 5;

pub struct ResearcherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResearcherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts a researcher's submissions and lists the most recent ones.
    pub async fn summary(&self, user_id: i32) -> Result<ResearcherSummary, AppError> {
        let site_repo = SiteRepository::new(self.db);

        let counts = site_repo.counts_by_contributor(user_id).await?;
        let recent = site_repo
            .get_by_contributor(user_id, Some(RECENT_ACTIVITY_LIMIT))
            .await?;

        Ok(ResearcherSummary { counts, recent })
    }
}
