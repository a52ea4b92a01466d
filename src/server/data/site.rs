//! Site data repository for database operations.
//!
//! Provides the `SiteRepository` for creating sites, listing them by approval status or
//! contributor, counting them for dashboards, and applying approval and guide changes.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::site::SiteStatus,
    server::{
        error::AppError,
        model::{
            site::{CreateSiteParam, Site, SiteCounts},
            PageParam,
        },
    },
};

/// Repository providing database operations for sites.
pub struct SiteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new site.
    ///
    /// # Returns
    /// - `Ok(Site)` - The created site
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. unknown contributor or agent id
    pub async fn create(&self, param: CreateSiteParam) -> Result<Site, AppError> {
        let entity = entity::site::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            location: ActiveValue::Set(param.location),
            image_url: ActiveValue::Set(param.image_url),
            entrance_fee: ActiveValue::Set(param.entrance_fee),
            created_by: ActiveValue::Set(param.created_by),
            agent_id: ActiveValue::Set(param.agent_id),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Site::from_entity(entity)
    }

    /// Finds a site by primary key regardless of status.
    pub async fn find_by_id(&self, site_id: i32) -> Result<Option<Site>, AppError> {
        let entity = entity::prelude::Site::find_by_id(site_id)
            .one(self.db)
            .await?;

        entity.map(Site::from_entity).transpose()
    }

    /// Gets sites with pagination ordered by id, optionally filtered by status.
    ///
    /// # Returns
    /// - `Ok((sites, total))` - Sites for the requested page and the total matching row count
    pub async fn get_paginated(
        &self,
        status: Option<SiteStatus>,
        page: PageParam,
    ) -> Result<(Vec<Site>, u64), AppError> {
        let mut query = entity::prelude::Site::find().order_by_asc(entity::site::Column::SiteId);

        if let Some(status) = status {
            query = query.filter(entity::site::Column::Status.eq(status.as_str()));
        }

        let paginator = query.paginate(self.db, page.per_page.max(1));
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;

        let sites = entities
            .into_iter()
            .map(Site::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((sites, total))
    }

    /// Gets every site with the given status, oldest first.
    ///
    /// Backs the admin approval queue.
    pub async fn get_by_status(&self, status: SiteStatus) -> Result<Vec<Site>, AppError> {
        let entities = entity::prelude::Site::find()
            .filter(entity::site::Column::Status.eq(status.as_str()))
            .order_by_asc(entity::site::Column::CreatedAt)
            .order_by_asc(entity::site::Column::SiteId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Site::from_entity).collect()
    }

    /// Gets sites contributed by a user, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Contributing researcher
    /// - `limit` - Maximum number of sites, `None` for all
    pub async fn get_by_contributor(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<Site>, AppError> {
        let mut query = entity::prelude::Site::find()
            .filter(entity::site::Column::CreatedBy.eq(user_id))
            .order_by_desc(entity::site::Column::CreatedAt)
            .order_by_desc(entity::site::Column::SiteId);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let entities = query.all(self.db).await?;

        entities.into_iter().map(Site::from_entity).collect()
    }

    /// Counts sites, optionally restricted to a status.
    pub async fn count(&self, status: Option<SiteStatus>) -> Result<u64, AppError> {
        let mut query = entity::prelude::Site::find();

        if let Some(status) = status {
            query = query.filter(entity::site::Column::Status.eq(status.as_str()));
        }

        Ok(query.count(self.db).await?)
    }

    /// Counts a contributor's sites in total and per approval status.
    pub async fn counts_by_contributor(&self, user_id: i32) -> Result<SiteCounts, AppError> {
        let base = entity::prelude::Site::find().filter(entity::site::Column::CreatedBy.eq(user_id));

        let total = base.clone().count(self.db).await?;
        let pending = base
            .clone()
            .filter(entity::site::Column::Status.eq(SiteStatus::Pending.as_str()))
            .count(self.db)
            .await?;
        let approved = base
            .filter(entity::site::Column::Status.eq(SiteStatus::Approved.as_str()))
            .count(self.db)
            .await?;

        Ok(SiteCounts {
            total,
            pending,
            approved,
        })
    }

    /// Sets the approval status of a site.
    ///
    /// # Returns
    /// - `Ok(Some(Site))` - The updated site
    /// - `Ok(None)` - No site with that id
    pub async fn set_status(
        &self,
        site_id: i32,
        status: SiteStatus,
    ) -> Result<Option<Site>, AppError> {
        let result = entity::prelude::Site::update_many()
            .filter(entity::site::Column::SiteId.eq(site_id))
            .col_expr(entity::site::Column::Status, Expr::value(status.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(site_id).await
    }

    /// Assigns a guide to a site or clears the assignment.
    ///
    /// # Returns
    /// - `Ok(Some(Site))` - The updated site
    /// - `Ok(None)` - No site with that id
    pub async fn set_agent(
        &self,
        site_id: i32,
        agent_id: Option<i32>,
    ) -> Result<Option<Site>, AppError> {
        let result = entity::prelude::Site::update_many()
            .filter(entity::site::Column::SiteId.eq(site_id))
            .col_expr(entity::site::Column::AgentId, Expr::value(agent_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(site_id).await
    }

    /// Deletes a site and, through the foreign key, its payments.
    ///
    /// # Returns
    /// - `Ok(true)` - Site deleted
    /// - `Ok(false)` - No site with that id
    pub async fn delete(&self, site_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Site::delete_by_id(site_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
