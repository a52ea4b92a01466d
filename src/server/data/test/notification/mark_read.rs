use super::*;

/// Tests marking a visible notification read.
///
/// Expected: Ok(true) and the unread count drops to 0
#[tokio::test]
async fn marks_visible_notification_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let notification = factory::notification::create_notification(db).await?;

    let repo = NotificationRepository::new(db);
    assert_eq!(repo.unread_count(admin_audience(admin.user_id)).await?, 1);

    let marked = repo
        .mark_read(notification.notification_id, admin_audience(admin.user_id))
        .await?;

    assert!(marked);
    assert_eq!(repo.unread_count(admin_audience(admin.user_id)).await?, 0);

    Ok(())
}

/// Tests that another user's notification cannot be marked.
///
/// Expected: Ok(false) and the notification stays unread
#[tokio::test]
async fn refuses_foreign_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user_with_role(db, "researcher").await?;
    let other = factory::user::create_user_with_role(db, "researcher").await?;
    let notification = factory::notification::NotificationFactory::new(db)
        .recipient(owner.user_id)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let marked = repo
        .mark_read(notification.notification_id, user_audience(other.user_id))
        .await?;

    assert!(!marked);
    assert_eq!(repo.unread_count(user_audience(owner.user_id)).await?, 1);

    Ok(())
}

/// Tests marking everything read.
///
/// Expected: Ok(2) counting only the previously unread notifications
#[tokio::test]
async fn mark_all_read_counts_changed_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;

    factory::notification::create_notification(db).await?;
    factory::notification::NotificationFactory::new(db)
        .recipient(admin.user_id)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db)
        .read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_all_read(admin_audience(admin.user_id)).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.unread_count(admin_audience(admin.user_id)).await?, 0);

    Ok(())
}
