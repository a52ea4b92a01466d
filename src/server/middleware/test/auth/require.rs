use super::*;

mod require_admin;
mod require_researcher;

/// Tests that an empty permission list only requires a login.
///
/// Expected: Ok(User) for a visitor
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    let returned_user = result?;
    assert_eq!(returned_user.user_id, user.user_id);
    assert_eq!(returned_user.role, UserRole::Visitor);

    Ok(())
}

/// Tests access without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_deleted() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests a deactivated account with a live session.
///
/// Expected: Err(AuthError::AccountInactive)
#[tokio::test]
async fn fails_for_inactive_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("admin")
        .status("inactive")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let result = AuthGuard::new(db, session).require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}
