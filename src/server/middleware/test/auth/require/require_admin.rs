use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with role Admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Almaz")
        .role("admin")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(returned_user.first_name, "Almaz");
    assert!(returned_user.is_admin());

    Ok(())
}

/// Tests non-admin users are denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) for a researcher
#[tokio::test]
async fn denies_access_to_researcher() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "researcher").await?;
    AuthSession::new(session).set_user_id(user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, user.user_id);
            assert!(msg.contains("admin"));
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }

    Ok(())
}
