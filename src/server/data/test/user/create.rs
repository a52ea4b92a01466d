use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores all fields, sets the account active and
/// returns the parsed role.
///
/// Expected: Ok(User) with role SiteAgent and status Active
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("guide@example.com", UserRole::SiteAgent))
        .await?;

    assert!(user.user_id > 0);
    assert_eq!(user.email, "guide@example.com");
    assert_eq!(user.role, UserRole::SiteAgent);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.phone.as_deref(), Some("+251 911 000000"));

    Ok(())
}

/// Tests the unique email constraint.
///
/// Covers two registrations racing past the service's duplicate check.
///
/// Expected: Err(AppError::Conflict) on the second insert
#[tokio::test]
async fn conflicts_on_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("same@example.com", UserRole::Visitor))
        .await?;

    let result = repo
        .create(create_param("same@example.com", UserRole::Researcher))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that an unknown stored role surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("superuser")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_id(user.user_id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
