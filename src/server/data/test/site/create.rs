use super::*;

/// Tests creating a pending researcher submission.
///
/// Expected: Ok(Site) with the contributor and Pending status
#[tokio::test]
async fn creates_pending_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    let repo = SiteRepository::new(db);
    let site = repo
        .create(create_param(
            "Lalibela",
            Some(researcher.user_id),
            SiteStatus::Pending,
        ))
        .await?;

    assert_eq!(site.name, "Lalibela");
    assert_eq!(site.created_by, Some(researcher.user_id));
    assert_eq!(site.status, SiteStatus::Pending);
    assert_eq!(site.entrance_fee, 50.0);

    let found = repo.find_by_id(site.site_id).await?;
    assert_eq!(found, Some(site));

    Ok(())
}

/// Tests paginated listing with a status filter.
///
/// Expected: Ok with only approved sites and the approved total
#[tokio::test]
async fn paginates_with_status_filter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::site::create_site_with_status(db, "approved").await?;
    factory::site::create_site_with_status(db, "pending").await?;
    factory::site::create_site_with_status(db, "approved").await?;
    factory::site::create_site_with_status(db, "rejected").await?;

    let repo = SiteRepository::new(db);

    let (sites, total) = repo
        .get_paginated(Some(SiteStatus::Approved), PageParam { page: 0, per_page: 10 })
        .await?;
    assert_eq!(total, 2);
    assert!(sites.iter().all(|s| s.status == SiteStatus::Approved));

    let (sites, total) = repo
        .get_paginated(None, PageParam { page: 1, per_page: 3 })
        .await?;
    assert_eq!(total, 4);
    assert_eq!(sites.len(), 1);

    Ok(())
}

/// Tests deleting a site.
///
/// Expected: Ok(true) then Ok(false) once it is gone
#[tokio::test]
async fn deletes_site() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let site = factory::site::create_site(db).await?;

    let repo = SiteRepository::new(db);

    assert!(repo.delete(site.site_id).await?);
    assert!(repo.find_by_id(site.site_id).await?.is_none());
    assert!(!repo.delete(site.site_id).await?);

    Ok(())
}
