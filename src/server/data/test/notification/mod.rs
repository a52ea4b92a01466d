use crate::{
    model::notification::NotificationKind,
    server::{
        data::notification::NotificationRepository,
        error::AppError,
        model::notification::{CreateNotificationParam, NotificationAudience},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_for_audience;
mod mark_read;

fn admin_audience(user_id: i32) -> NotificationAudience {
    NotificationAudience {
        user_id,
        include_broadcast: true,
    }
}

fn user_audience(user_id: i32) -> NotificationAudience {
    NotificationAudience {
        user_id,
        include_broadcast: false,
    }
}
