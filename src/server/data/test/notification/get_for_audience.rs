use chrono::{Duration, Utc};

use super::*;

/// Tests that admins see broadcasts and their own notifications, newest first.
///
/// Expected: Ok with 2 notifications, the newer one first
#[tokio::test]
async fn admin_sees_broadcasts_and_own() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, "admin").await?;
    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    let older = factory::notification::NotificationFactory::new(db)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::notification::NotificationFactory::new(db)
        .recipient(admin.user_id)
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db)
        .recipient(researcher.user_id)
        .build()
        .await?;

    let notifications = NotificationRepository::new(db)
        .get_for_audience(admin_audience(admin.user_id))
        .await?;

    let ids: Vec<i32> = notifications.iter().map(|n| n.notification_id).collect();
    assert_eq!(ids, vec![newer.notification_id, older.notification_id]);

    Ok(())
}

/// Tests that regular users only see their own notifications.
///
/// Expected: Ok with the researcher's notification only
#[tokio::test]
async fn user_does_not_see_broadcasts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    factory::notification::create_notification(db).await?;
    let own = factory::notification::NotificationFactory::new(db)
        .recipient(researcher.user_id)
        .kind("warning")
        .build()
        .await?;

    let notifications = NotificationRepository::new(db)
        .get_for_audience(user_audience(researcher.user_id))
        .await?;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].notification_id, own.notification_id);
    assert_eq!(notifications[0].kind, NotificationKind::Warning);

    Ok(())
}
