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
        user::{CreateUserDto, RegisterVisitorDto, UpdateUserStatusDto, UserDto, UserRole},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            user::{NewUserParam, User, UserFilter},
            PageParam,
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub role: Option<UserRole>,
}

/// Create an account from the admin dashboard.
///
/// Used by the "add guide" and "add researcher" buttons. Adding a site agent notifies
/// every admin.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Invalid name, email or password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create_user(NewUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List accounts ordered by id.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("role" = Option<UserRole>, Query, description = "Only users with this role")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedDto<UserDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<UserListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(
            UserFilter { role: params.role },
            PageParam::from_query(params.page, params.entries)?,
        )
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(User::into_dto))))
}

/// Get one account.
///
/// # Access Control
/// - `Admin` - Only admins can view accounts
#[utoipa::path(
    get,
    path = "/api/admin/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Activate or deactivate an account.
///
/// # Access Control
/// - `Admin` - Only admins can change account status, never their own deactivation
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/status",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserStatusDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Admin tried to deactivate themselves", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_status(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .set_status(admin.user_id, user_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account.
///
/// # Access Control
/// - `Admin` - Only admins can delete accounts, never their own
#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Admin tried to delete themselves", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .delete_user(admin.user_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Register a visitor account.
///
/// Public endpoint; the role is always `visitor`.
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterVisitorDto,
    responses(
        (status = 201, description = "Visitor registered", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterVisitorDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create_user(NewUserParam::from_register_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
