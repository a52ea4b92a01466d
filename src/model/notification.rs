use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Payment,
    GuideRequest,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Payment => "payment",
            Self::GuideRequest => "guide_request",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "payment" => Some(Self::Payment),
            "guide_request" => Some(Self::GuideRequest),
            _ => None,
        }
    }

    /// Visual tone the dashboards use for the notification dot.
    pub fn tone(&self) -> NotificationTone {
        match self {
            Self::Payment | Self::Success => NotificationTone::Success,
            Self::GuideRequest | Self::Warning => NotificationTone::Warning,
            Self::Info => NotificationTone::Info,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTone {
    Info,
    Success,
    Warning,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NotificationDto {
    pub notification_id: i32,
    pub user_id: Option<i32>,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub tone: NotificationTone,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UnreadCountDto {
    pub unread: u64,
}
