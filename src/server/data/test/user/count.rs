use super::*;

/// Tests counting users by role and status.
///
/// Creates active and inactive guides plus visitors and verifies the filtered counts
/// used by the home page statistics.
///
/// Expected: Ok with matching counts per filter
#[tokio::test]
async fn counts_by_role_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "site_agent").await?;
    factory::user::create_user_with_role(db, "site_agent").await?;
    factory::user::UserFactory::new(db)
        .role("site_agent")
        .status("inactive")
        .build()
        .await?;
    factory::user::create_user_with_role(db, "visitor").await?;
    factory::user::create_user_with_role(db, "admin").await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.count(Some(UserRole::SiteAgent), Some(UserStatus::Active))
            .await?,
        2
    );
    assert_eq!(repo.count(Some(UserRole::SiteAgent), None).await?, 3);
    assert_eq!(repo.count(Some(UserRole::Visitor), None).await?, 1);
    assert_eq!(repo.count(None, None).await?, 5);
    assert!(repo.admin_exists().await?);

    Ok(())
}

/// Tests admin detection on an empty table.
///
/// Expected: Ok(false)
#[tokio::test]
async fn no_admin_in_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);
    assert_eq!(repo.count(None, None).await?, 0);

    Ok(())
}
