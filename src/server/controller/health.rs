use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::HealthDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe that pings the database.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 503, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Database health check failed: {}", err);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Database unavailable".to_string(),
                }),
            )
                .into_response()
        }
    }
}
