use super::*;

/// Tests deactivating a user.
///
/// Expected: Ok(true) and the stored status becomes Inactive
#[tokio::test]
async fn deactivates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, "site_agent").await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_status(user.user_id, UserStatus::Inactive).await?;

    assert!(updated);
    let user = repo.find_by_id(user.user_id).await?.unwrap();
    assert_eq!(user.status, UserStatus::Inactive);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .set_status(999, UserStatus::Inactive)
        .await?;

    assert!(!updated);

    Ok(())
}
