//! Aggregate counters for the home page and the admin dashboard.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        payment::PaymentStatus,
        site::SiteStatus,
        user::{UserRole, UserStatus},
    },
    server::{
        data::{payment::PaymentRepository, site::SiteRepository, user::UserRepository},
        error::AppError,
        model::stats::{AdminSummary, PublicStats},
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts approved sites, active guides and registered visitors.
    pub async fn public_stats(&self) -> Result<PublicStats, AppError> {
        let user_repo = UserRepository::new(self.db);
        let site_repo = SiteRepository::new(self.db);

        let sites = site_repo.count(Some(SiteStatus::Approved)).await?;
        let guides = user_repo
            .count(Some(UserRole::SiteAgent), Some(UserStatus::Active))
            .await?;
        let visitors = user_repo.count(Some(UserRole::Visitor), None).await?;

        Ok(PublicStats {
            sites,
            guides,
            visitors,
        })
    }

    /// Totals for the admin dashboard.
    ///
    /// Each completed payment counts as one paid visit; revenue is the sum of completed
    /// payment amounts.
    pub async fn admin_summary(&self) -> Result<AdminSummary, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        let total_users = UserRepository::new(self.db).count(None, None).await?;
        let total_sites = SiteRepository::new(self.db).count(None).await?;
        let total_visits = payment_repo
            .count_by_status(PaymentStatus::Completed)
            .await?;
        let total_payments = payment_repo.sum_by_status(PaymentStatus::Completed).await?;

        Ok(AdminSummary {
            total_users,
            total_sites,
            total_visits,
            total_payments,
        })
    }
}
