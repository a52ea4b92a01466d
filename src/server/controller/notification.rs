use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, UpdatedCountDto},
        notification::{NotificationDto, UnreadCountDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::Notification,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Notifications for the admin dashboard, broadcasts included.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications, newest first", body = Vec<NotificationDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let notifications = NotificationService::new(&state.db)
        .get_for_user(&admin)
        .await?;
    let notifications_dto: Vec<NotificationDto> =
        notifications.into_iter().map(Notification::into_dto).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// Notifications visible to the logged-in user.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications, newest first", body = Vec<NotificationDto>),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications = NotificationService::new(&state.db)
        .get_for_user(&user)
        .await?;
    let notifications_dto: Vec<NotificationDto> =
        notifications.into_iter().map(Notification::into_dto).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification marked read"),
        (status = 404, description = "Notification not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    session: Session,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    NotificationService::new(&state.db)
        .mark_read(&user, notification_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Number of notifications marked read", body = UpdatedCountDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(&user)
        .await?;

    Ok((StatusCode::OK, Json(UpdatedCountDto { updated })))
}

#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread notification count", body = UnreadCountDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let unread = NotificationService::new(&state.db)
        .unread_count(&user)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread })))
}
