use super::*;

/// Tests the approval queue ordering.
///
/// Expected: Ok with pending sites only, oldest first
#[tokio::test]
async fn returns_pending_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteRepository::new(db);
    let first = repo
        .create(create_param("Axum", None, SiteStatus::Pending))
        .await?;
    let second = repo
        .create(create_param("Gondar", None, SiteStatus::Pending))
        .await?;
    repo.create(create_param("Harar", None, SiteStatus::Approved))
        .await?;

    let pending = repo.get_by_status(SiteStatus::Pending).await?;

    let ids: Vec<i32> = pending.iter().map(|s| s.site_id).collect();
    assert_eq!(ids, vec![first.site_id, second.site_id]);

    Ok(())
}

/// Tests an empty queue.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::create_site(db).await?;

    let pending = SiteRepository::new(db)
        .get_by_status(SiteStatus::Pending)
        .await?;

    assert!(pending.is_empty());

    Ok(())
}
