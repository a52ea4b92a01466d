use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, site::ResearcherSummaryDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::researcher::ResearcherService,
        state::AppState,
    },
};

/// Tag for grouping researcher dashboard endpoints in OpenAPI documentation
pub static RESEARCHER_TAG: &str = "researcher";

/// Dashboard summary for the logged-in researcher.
///
/// # Access Control
/// - `Researcher`
#[utoipa::path(
    get,
    path = "/api/researcher/summary",
    tag = RESEARCHER_TAG,
    responses(
        (status = 200, description = "Submission counts and recent activity", body = ResearcherSummaryDto),
        (status = 403, description = "Caller is not a researcher", body = ErrorDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let researcher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Researcher])
        .await?;

    let summary = ResearcherService::new(&state.db)
        .summary(researcher.user_id)
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Dashboard summary for a given researcher.
///
/// # Access Control
/// - `Researcher` - Only for their own id; admins may view any researcher
#[utoipa::path(
    get,
    path = "/api/researcher/{user_id}/summary",
    tag = RESEARCHER_TAG,
    params(
        ("user_id" = i32, Path, description = "Researcher user ID")
    ),
    responses(
        (status = 200, description = "Submission counts and recent activity", body = ResearcherSummaryDto),
        (status = 403, description = "Caller may not view this summary", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_summary(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Researcher])
        .await?;

    if !caller.is_admin() && caller.user_id != user_id {
        return Err(AuthError::AccessDenied(
            caller.user_id,
            format!("User attempted to view the summary of researcher {}", user_id),
        )
        .into());
    }

    let summary = ResearcherService::new(&state.db).summary(user_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
