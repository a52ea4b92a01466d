//! Heritage site catalogue and the approval workflow.
//!
//! Admin-created sites are published immediately. Researcher submissions start `pending`,
//! are announced to admins and, once reviewed, the researcher is told the outcome.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        notification::NotificationKind,
        site::SiteStatus,
        user::{UserRole, UserStatus},
    },
    server::{
        data::{notification::NotificationRepository, site::SiteRepository, user::UserRepository},
        error::AppError,
        model::{
            notification::CreateNotificationParam,
            site::{CreateSiteParam, Site},
            user::User,
            PageParam, Paginated,
        },
    },
};

pub struct SiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an approved site on behalf of an admin.
    ///
    /// # Returns
    /// - `Ok(Site)` - The published site
    /// - `Err(AppError::BadRequest)` - Missing fields, negative fee or invalid guide
    pub async fn create(&self, param: CreateSiteParam) -> Result<Site, AppError> {
        validate_site(&param)?;
        if let Some(agent_id) = param.agent_id {
            self.require_active_agent(agent_id).await?;
        }

        let site = SiteRepository::new(self.db)
            .create(CreateSiteParam {
                status: SiteStatus::Approved,
                ..param
            })
            .await?;

        tracing::info!("Published site {} ({})", site.site_id, site.name);

        Ok(site)
    }

    /// Stores a researcher submission as pending and notifies admins.
    ///
    /// # Arguments
    /// - `researcher` - Submitting user, recorded as the contributor
    /// - `param` - Site data; status and guide are ignored
    pub async fn submit(&self, researcher: &User, param: CreateSiteParam) -> Result<Site, AppError> {
        validate_site(&param)?;

        let site = SiteRepository::new(self.db)
            .create(CreateSiteParam {
                created_by: Some(researcher.user_id),
                agent_id: None,
                status: SiteStatus::Pending,
                ..param
            })
            .await?;

        NotificationRepository::new(self.db)
            .create(CreateNotificationParam::for_admins(
                NotificationKind::Info,
                "New site submitted",
                format!(
                    "{} submitted \"{}\" for approval",
                    researcher.full_name(),
                    site.name
                ),
            ))
            .await?;

        tracing::info!(
            "User {} submitted site {} for approval",
            researcher.user_id,
            site.site_id
        );

        Ok(site)
    }

    /// Sites waiting for review, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<Site>, AppError> {
        SiteRepository::new(self.db)
            .get_by_status(SiteStatus::Pending)
            .await
    }

    /// All sites for the admin catalogue, optionally filtered by status.
    pub async fn get_all(
        &self,
        status: Option<SiteStatus>,
        page: PageParam,
    ) -> Result<Paginated<Site>, AppError> {
        let (sites, total) = SiteRepository::new(self.db)
            .get_paginated(status, page)
            .await?;

        Ok(Paginated::new(sites, total, page))
    }

    /// Approved sites for the public catalogue.
    pub async fn get_published(&self, page: PageParam) -> Result<Paginated<Site>, AppError> {
        self.get_all(Some(SiteStatus::Approved), page).await
    }

    /// One approved site.
    ///
    /// # Returns
    /// - `Ok(Site)` - The site
    /// - `Err(AppError::NotFound)` - Site missing or not approved
    pub async fn get_published_site(&self, site_id: i32) -> Result<Site, AppError> {
        SiteRepository::new(self.db)
            .find_by_id(site_id)
            .await?
            .filter(|site| site.status == SiteStatus::Approved)
            .ok_or_else(|| AppError::NotFound("Site not found".to_string()))
    }

    /// Sites contributed by a researcher, newest first.
    pub async fn get_by_contributor(&self, user_id: i32) -> Result<Vec<Site>, AppError> {
        SiteRepository::new(self.db)
            .get_by_contributor(user_id, None)
            .await
    }

    /// Approves or rejects a site and tells the contributing researcher.
    ///
    /// Approval sends a `success` notification, rejection a `warning`. Moving a site back
    /// to pending sends nothing.
    ///
    /// # Returns
    /// - `Ok(Site)` - The updated site
    /// - `Err(AppError::NotFound)` - No site with that id
    pub async fn review(&self, site_id: i32, status: SiteStatus) -> Result<Site, AppError> {
        let site = SiteRepository::new(self.db)
            .set_status(site_id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

        tracing::info!("Site {} marked {}", site.site_id, status.as_str());

        let Some(researcher_id) = site.created_by else {
            return Ok(site);
        };

        let notification = match status {
            SiteStatus::Approved => Some(CreateNotificationParam::for_user(
                researcher_id,
                NotificationKind::Success,
                "Site approved",
                format!("\"{}\" is now visible to visitors", site.name),
            )),
            SiteStatus::Rejected => Some(CreateNotificationParam::for_user(
                researcher_id,
                NotificationKind::Warning,
                "Site rejected",
                format!("\"{}\" was not approved", site.name),
            )),
            SiteStatus::Pending => None,
        };

        if let Some(notification) = notification {
            NotificationRepository::new(self.db)
                .create(notification)
                .await?;
        }

        Ok(site)
    }

    /// Assigns a guide to a site or clears the assignment with `None`.
    ///
    /// # Returns
    /// - `Ok(Site)` - The updated site
    /// - `Err(AppError::BadRequest)` - The user is not an active site agent
    /// - `Err(AppError::NotFound)` - No site with that id
    pub async fn assign_agent(&self, site_id: i32, agent_id: Option<i32>) -> Result<Site, AppError> {
        if let Some(agent_id) = agent_id {
            self.require_active_agent(agent_id).await?;
        }

        SiteRepository::new(self.db)
            .set_agent(site_id, agent_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Site not found".to_string()))
    }

    /// Deletes a site together with its payments.
    ///
    /// # Returns
    /// - `Ok(())` - Site deleted
    /// - `Err(AppError::NotFound)` - No site with that id
    pub async fn delete(&self, site_id: i32) -> Result<(), AppError> {
        if !SiteRepository::new(self.db).delete(site_id).await? {
            return Err(AppError::NotFound("Site not found".to_string()));
        }

        tracing::info!("Deleted site {}", site_id);

        Ok(())
    }

    async fn require_active_agent(&self, agent_id: i32) -> Result<(), AppError> {
        let agent = UserRepository::new(self.db).find_by_id(agent_id).await?;

        match agent {
            Some(agent) if agent.role == UserRole::SiteAgent && agent.status == UserStatus::Active => {
                Ok(())
            }
            _ => Err(AppError::BadRequest(format!(
                "User {} is not an active site agent",
                agent_id
            ))),
        }
    }
}

fn validate_site(param: &CreateSiteParam) -> Result<(), AppError> {
    if param.name.is_empty() || param.location.is_empty() {
        return Err(AppError::BadRequest(
            "Site name and location are required".to_string(),
        ));
    }
    if !param.entrance_fee.is_finite() || param.entrance_fee < 0.0 {
        return Err(AppError::BadRequest(
            "Entrance fee must not be negative".to_string(),
        ));
    }

    Ok(())
}
