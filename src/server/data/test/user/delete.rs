use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(true) then the user is gone and a second delete returns Ok(false)
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.user_id).await?);
    assert!(repo.find_by_id(user.user_id).await?.is_none());
    assert!(!repo.delete(user.user_id).await?);

    Ok(())
}
