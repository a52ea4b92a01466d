//! Dashboard notifications.
//!
//! Every user sees notifications addressed to them; admins additionally see the
//! broadcasts addressed to all admins.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::{
        notification::{Notification, NotificationAudience},
        user::User,
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifications visible to the user, newest first.
    pub async fn get_for_user(&self, user: &User) -> Result<Vec<Notification>, AppError> {
        NotificationRepository::new(self.db)
            .get_for_audience(audience(user))
            .await
    }

    /// Marks one notification read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification is now read
    /// - `Err(AppError::NotFound)` - No such notification visible to the user
    pub async fn mark_read(&self, user: &User, notification_id: i32) -> Result<(), AppError> {
        let marked = NotificationRepository::new(self.db)
            .mark_read(notification_id, audience(user))
            .await?;

        if !marked {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    /// Marks every visible notification read, returning how many changed.
    pub async fn mark_all_read(&self, user: &User) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .mark_all_read(audience(user))
            .await
    }

    pub async fn unread_count(&self, user: &User) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .unread_count(audience(user))
            .await
    }
}

fn audience(user: &User) -> NotificationAudience {
    NotificationAudience {
        user_id: user.user_id,
        include_broadcast: user.is_admin(),
    }
}
