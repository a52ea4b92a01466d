use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Service for email and password authentication.
pub struct AuthService<'a> {
    /// Database connection for user lookups.
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies login credentials.
    ///
    /// The email is matched case-insensitively. An unknown email and a wrong password
    /// produce the same error so callers cannot probe for registered addresses.
    ///
    /// # Arguments
    /// - `email` - Email address as typed by the user
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid and the account is active
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Credentials are valid but the account is deactivated
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active() {
            return Err(AuthError::AccountInactive(user.user_id).into());
        }

        tracing::info!("User {} logged in", user.user_id);

        Ok(user)
    }
}
