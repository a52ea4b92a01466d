use super::*;

/// Tests creating an admin broadcast.
///
/// Expected: Ok(Notification) without recipient, unread, kind GuideRequest
#[tokio::test]
async fn creates_admin_broadcast() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParam::for_admins(
            NotificationKind::GuideRequest,
            "New guide",
            "Hana Tesfaye registered as a site agent",
        ))
        .await?;

    assert_eq!(notification.user_id, None);
    assert_eq!(notification.kind, NotificationKind::GuideRequest);
    assert!(!notification.is_read);

    Ok(())
}

/// Tests creating a notification for one user.
///
/// Expected: Ok(Notification) addressed to that user
#[tokio::test]
async fn creates_user_notification() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    let notification = NotificationRepository::new(db)
        .create(CreateNotificationParam::for_user(
            researcher.user_id,
            NotificationKind::Success,
            "Site approved",
            "Your site is now public",
        ))
        .await?;

    assert_eq!(notification.user_id, Some(researcher.user_id));
    assert_eq!(notification.title, "Site approved");

    Ok(())
}
