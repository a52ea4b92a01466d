use super::*;

/// Tests pagination across multiple pages.
///
/// Expected: Ok with 2 users on the first page, 1 on the last and a total of 5
#[tokio::test]
async fn returns_correct_page_of_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let (users, total) = repo
        .get_all_paginated(&UserFilter::default(), PageParam { page: 0, per_page: 2 })
        .await?;
    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);
    assert!(users[0].user_id < users[1].user_id);

    let (users, _) = repo
        .get_all_paginated(&UserFilter::default(), PageParam { page: 2, per_page: 2 })
        .await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests filtering the listing by role.
///
/// Expected: Ok with only researchers
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "researcher").await?;
    factory::user::create_user_with_role(db, "visitor").await?;
    factory::user::create_user_with_role(db, "researcher").await?;

    let filter = UserFilter {
        role: Some(UserRole::Researcher),
    };
    let (users, total) = UserRepository::new(db)
        .get_all_paginated(&filter, PageParam { page: 0, per_page: 10 })
        .await?;

    assert_eq!(total, 2);
    assert!(users.iter().all(|u| u.role == UserRole::Researcher));

    Ok(())
}
