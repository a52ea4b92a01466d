use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        stats::{AdminSummaryDto, StatsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Home page counters.
///
/// Database errors are logged and reported with a fixed message.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Approved sites, active guides and visitors", body = StatsDto),
        (status = 500, description = "Failed to fetch statistics", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    match StatsService::new(&state.db).public_stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats.into_dto())).into_response(),
        Err(err) => {
            tracing::error!("Error fetching stats: {}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Failed to fetch statistics".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Admin dashboard chart values.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/summary",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "User, site, visit and revenue totals", body = AdminSummaryDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let summary = StatsService::new(&state.db).admin_summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
