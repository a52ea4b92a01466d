use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

pub enum Permission {
    /// Role `admin`.
    Admin,
    /// Role `researcher`, admins pass as well.
    Researcher,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission.
    ///
    /// An empty permission list only requires a logged-in user. Deactivated accounts are
    /// refused even when their session is still alive.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user no longer exists
    /// - `Err(AuthError::AccountInactive)` - The account was deactivated
    /// - `Err(AuthError::AccessDenied)` - A required role is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active() {
            return Err(AuthError::AccountInactive(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Researcher => {
                    if !matches!(user.role, UserRole::Researcher | UserRole::Admin) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a researcher action without the researcher role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
