//! Notification domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{NotificationDto, NotificationKind},
    server::{error::AppError, util::parse::parse_enum},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_id: i32,
    /// Recipient, `None` for notifications addressed to all admins.
    pub user_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        Ok(Self {
            notification_id: entity.notification_id,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            kind: parse_enum("notifications.type", entity.kind, NotificationKind::parse)?,
            is_read: entity.is_read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            notification_id: self.notification_id,
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            tone: self.kind.tone(),
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: Option<i32>,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl CreateNotificationParam {
    /// Notification addressed to every admin.
    pub fn for_admins(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: None,
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    /// Notification addressed to a single user.
    pub fn for_user(
        user_id: i32,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            title: title.into(),
            message: message.into(),
            kind,
        }
    }
}

/// Which notifications a caller may see.
///
/// Every user sees notifications addressed to them; admins also see broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationAudience {
    pub user_id: i32,
    pub include_broadcast: bool,
}
