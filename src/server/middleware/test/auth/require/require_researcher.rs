use super::*;

/// Tests researchers pass the researcher check.
///
/// Expected: Ok(User) with role Researcher
#[tokio::test]
async fn grants_access_to_researcher() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "researcher").await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::Researcher])
        .await?;

    assert_eq!(returned_user.role, UserRole::Researcher);

    Ok(())
}

/// Tests admins pass the researcher check.
///
/// Expected: Ok(User) with role Admin
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "admin").await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Researcher])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests guides and visitors are denied.
///
/// Expected: Err(AuthError::AccessDenied) for a site agent
#[tokio::test]
async fn denies_access_to_site_agent() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "site_agent").await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Researcher])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
