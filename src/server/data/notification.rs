//! Notification data repository for database operations.
//!
//! Notifications are either addressed to one user or broadcast to every admin
//! (`user_id IS NULL`). Every query here is scoped by a `NotificationAudience` so a
//! caller can never read or mark notifications addressed to somebody else.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParam, Notification, NotificationAudience},
};

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Gets every notification visible to the audience, newest first.
    pub async fn get_for_audience(
        &self,
        audience: NotificationAudience,
    ) -> Result<Vec<Notification>, AppError> {
        let entities = entity::prelude::Notification::find()
            .filter(audience_condition(audience))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::NotificationId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Notification::from_entity).collect()
    }

    /// Marks one notification read if the audience can see it.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification exists and is visible (it may already have been read)
    /// - `Ok(false)` - No such notification for this audience
    pub async fn mark_read(
        &self,
        notification_id: i32,
        audience: NotificationAudience,
    ) -> Result<bool, AppError> {
        let visible = entity::prelude::Notification::find()
            .filter(entity::notification::Column::NotificationId.eq(notification_id))
            .filter(audience_condition(audience))
            .count(self.db)
            .await?;

        if visible == 0 {
            return Ok(false);
        }

        entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::NotificationId.eq(notification_id))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Marks every unread notification visible to the audience read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that changed from unread to read
    pub async fn mark_all_read(&self, audience: NotificationAudience) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::update_many()
            .filter(audience_condition(audience))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts unread notifications visible to the audience.
    pub async fn unread_count(&self, audience: NotificationAudience) -> Result<u64, AppError> {
        let count = entity::prelude::Notification::find()
            .filter(audience_condition(audience))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }
}

fn audience_condition(audience: NotificationAudience) -> Condition {
    let mut condition =
        Condition::any().add(entity::notification::Column::UserId.eq(audience.user_id));

    if audience.include_broadcast {
        condition = condition.add(entity::notification::Column::UserId.is_null());
    }

    condition
}
