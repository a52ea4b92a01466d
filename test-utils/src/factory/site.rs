//! Site factory for creating test site entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sites with customizable fields.
///
/// Sites default to `approved` with no contributor and no assigned guide.
pub struct SiteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    location: String,
    image_url: Option<String>,
    entrance_fee: f64,
    created_by: Option<i32>,
    agent_id: Option<i32>,
    status: String,
}

impl<'a> SiteFactory<'a> {
    /// Creates a new SiteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Site {id}"`
    /// - location: `"Amhara"`
    /// - entrance_fee: `0.0`
    /// - status: `"approved"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Site {}", id),
            description: format!("Description for site {}", id),
            location: "Amhara".to_string(),
            image_url: None,
            entrance_fee: 0.0,
            created_by: None,
            agent_id: None,
            status: "approved".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn entrance_fee(mut self, entrance_fee: f64) -> Self {
        self.entrance_fee = entrance_fee;
        self
    }

    /// Sets the contributing researcher. The user must already exist.
    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Sets the assigned guide. The user must already exist.
    pub fn agent(mut self, user_id: i32) -> Self {
        self.agent_id = Some(user_id);
        self
    }

    /// Sets the approval status (`pending`, `approved`, `rejected`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the site entity into the database.
    pub async fn build(self) -> Result<entity::site::Model, DbErr> {
        entity::site::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            location: ActiveValue::Set(self.location),
            image_url: ActiveValue::Set(self.image_url),
            entrance_fee: ActiveValue::Set(self.entrance_fee),
            created_by: ActiveValue::Set(self.created_by),
            agent_id: ActiveValue::Set(self.agent_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved site with default values.
pub async fn create_site(db: &DatabaseConnection) -> Result<entity::site::Model, DbErr> {
    SiteFactory::new(db).build().await
}

/// Creates a site with the given status.
pub async fn create_site_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<entity::site::Model, DbErr> {
    SiteFactory::new(db).status(status).build().await
}
