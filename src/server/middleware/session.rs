//! Type-safe session management wrappers.
//!
//! This module provides a typed interface over the tower-sessions `Session` so handlers
//! never touch raw session keys.

use tower_sessions::Session;

use crate::server::error::AppError;

pub(crate) const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful login. The session id is cycled first so a session id
    /// issued before login cannot be reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::context::TestContext;

    #[tokio::test]
    async fn stores_and_clears_user_id() -> Result<(), AppError> {
        let mut context = TestContext::new();
        let session = context.session().await.unwrap();

        let auth_session = AuthSession::new(session);
        assert_eq!(auth_session.get_user_id().await?, None);

        auth_session.set_user_id(7).await?;
        assert_eq!(auth_session.get_user_id().await?, Some(7));

        auth_session.clear().await;
        assert_eq!(auth_session.get_user_id().await?, None);

        Ok(())
    }
}
