use super::*;

/// Tests approving a pending site.
///
/// Expected: Ok(Some(Site)) with status Approved
#[tokio::test]
async fn approves_pending_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site_with_status(db, "pending").await?;

    let updated = SiteRepository::new(db)
        .set_status(site.site_id, SiteStatus::Approved)
        .await?;

    let updated = updated.expect("site should exist");
    assert_eq!(updated.status, SiteStatus::Approved);
    assert_eq!(updated.name, site.name);

    Ok(())
}

/// Tests updating a missing site.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = SiteRepository::new(db)
        .set_status(404, SiteStatus::Rejected)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
