use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        site::{AssignAgentDto, CreateSiteDto, SiteDto, SiteStatus, UpdateSiteStatusDto},
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            site::{CreateSiteParam, Site},
            PageParam,
        },
        service::site::SiteService,
        state::AppState,
    },
};

/// Tag for grouping site endpoints in OpenAPI documentation
pub static SITE_TAG: &str = "site";

#[derive(Deserialize)]
pub struct SiteListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub status: Option<SiteStatus>,
}

/// List approved sites for the public catalogue.
#[utoipa::path(
    get,
    path = "/api/sites",
    tag = SITE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of approved sites", body = PaginatedDto<SiteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sites(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let sites = SiteService::new(&state.db)
        .get_published(params.page_param()?)
        .await?;

    Ok((StatusCode::OK, Json(sites.into_dto(Site::into_dto))))
}

/// Get one approved site.
#[utoipa::path(
    get,
    path = "/api/sites/{site_id}",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    responses(
        (status = 200, description = "The site", body = SiteDto),
        (status = 404, description = "Site not found or not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_site(
    State(state): State<AppState>,
    Path(site_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let site = SiteService::new(&state.db)
        .get_published_site(site_id)
        .await?;

    Ok((StatusCode::OK, Json(site.into_dto())))
}

/// Publish a site directly.
///
/// # Access Control
/// - `Admin` - Admin-created sites are approved immediately
#[utoipa::path(
    post,
    path = "/api/admin/sites",
    tag = SITE_TAG,
    request_body = CreateSiteDto,
    responses(
        (status = 201, description = "Site created", body = SiteDto),
        (status = 400, description = "Invalid site data", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_site(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateSiteParam::from_dto(payload, Some(admin.user_id), SiteStatus::Approved);
    let site = SiteService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(site.into_dto())))
}

/// Sites waiting for approval, oldest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/requests",
    tag = SITE_TAG,
    responses(
        (status = 200, description = "Pending sites", body = Vec<SiteDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_site_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let sites = SiteService::new(&state.db).get_pending().await?;
    let sites_dto: Vec<SiteDto> = sites.into_iter().map(Site::into_dto).collect();

    Ok((StatusCode::OK, Json(sites_dto)))
}

/// List all sites, optionally filtered by status.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/sites",
    tag = SITE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("status" = Option<SiteStatus>, Query, description = "Only sites with this status")
    ),
    responses(
        (status = 200, description = "Page of sites", body = PaginatedDto<SiteDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_sites(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<SiteListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let sites = SiteService::new(&state.db)
        .get_all(
            params.status,
            PageParam::from_query(params.page, params.entries)?,
        )
        .await?;

    Ok((StatusCode::OK, Json(sites.into_dto(Site::into_dto))))
}

/// Approve or reject a site.
///
/// The contributing researcher is notified of the decision.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/sites/{site_id}/status",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    request_body = UpdateSiteStatusDto,
    responses(
        (status = 200, description = "Updated site", body = SiteDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_site_status(
    State(state): State<AppState>,
    session: Session,
    Path(site_id): Path<i32>,
    Json(payload): Json<UpdateSiteStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let site = SiteService::new(&state.db)
        .review(site_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(site.into_dto())))
}

/// Assign a guide to a site, or clear the assignment with `null`.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/sites/{site_id}/agent",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    request_body = AssignAgentDto,
    responses(
        (status = 200, description = "Updated site", body = SiteDto),
        (status = 400, description = "User is not an active site agent", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_site_agent(
    State(state): State<AppState>,
    session: Session,
    Path(site_id): Path<i32>,
    Json(payload): Json<AssignAgentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let site = SiteService::new(&state.db)
        .assign_agent(site_id, payload.agent_id)
        .await?;

    Ok((StatusCode::OK, Json(site.into_dto())))
}

/// Delete a site and its payments.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/sites/{site_id}",
    tag = SITE_TAG,
    params(
        ("site_id" = i32, Path, description = "Site ID")
    ),
    responses(
        (status = 204, description = "Site deleted"),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_site(
    State(state): State<AppState>,
    session: Session,
    Path(site_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SiteService::new(&state.db).delete(site_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Submit a site for approval.
///
/// # Access Control
/// - `Researcher` - Researchers and admins; the caller becomes the contributor
#[utoipa::path(
    post,
    path = "/api/researcher/sites",
    tag = SITE_TAG,
    request_body = CreateSiteDto,
    responses(
        (status = 201, description = "Site submitted", body = SiteDto),
        (status = 400, description = "Invalid site data", body = ErrorDto),
        (status = 403, description = "Caller is not a researcher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_site(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let researcher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Researcher])
        .await?;

    let param = CreateSiteParam::from_dto(payload, Some(researcher.user_id), SiteStatus::Pending);
    let site = SiteService::new(&state.db)
        .submit(&researcher, param)
        .await?;

    Ok((StatusCode::CREATED, Json(site.into_dto())))
}

/// The caller's own submissions, newest first.
///
/// # Access Control
/// - `Researcher`
#[utoipa::path(
    get,
    path = "/api/researcher/sites",
    tag = SITE_TAG,
    responses(
        (status = 200, description = "Submitted sites", body = Vec<SiteDto>),
        (status = 403, description = "Caller is not a researcher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_sites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let researcher = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Researcher])
        .await?;

    let sites = SiteService::new(&state.db)
        .get_by_contributor(researcher.user_id)
        .await?;
    let sites_dto: Vec<SiteDto> = sites.into_iter().map(Site::into_dto).collect();

    Ok((StatusCode::OK, Json(sites_dto)))
}
