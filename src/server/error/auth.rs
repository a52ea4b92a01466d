use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request was made without logging in or the session expired.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user lacks the role required for the endpoint.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Description of the denied action, logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account exists but has been deactivated by an admin.
    #[error("User {0} is inactive")]
    AccountInactive(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `AccountInactive` → 403 Forbidden
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::NOT_FOUND, "User not found")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to access this resource",
            ),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "This account has been deactivated"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
