//! Notification factory for creating test notification entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications.
///
/// Notifications default to an unread `info` broadcast to admins.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    title: String,
    message: String,
    kind: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: None,
            title: format!("Notification {}", id),
            message: format!("Message {}", id),
            kind: "info".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Addresses the notification to a single user instead of all admins.
    pub fn recipient(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the notification type (`info`, `success`, `warning`, `payment`, `guide_request`).
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            kind: ActiveValue::Set(self.kind),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread admin broadcast notification.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db).build().await
}
