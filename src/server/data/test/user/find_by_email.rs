use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("tigist@example.com")
        .role("researcher")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("tigist@example.com").await?;

    let user = user.expect("user should exist");
    assert_eq!(user.user_id, created.user_id);
    assert_eq!(user.role, UserRole::Researcher);
    assert!(repo.email_exists("tigist@example.com").await?);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
