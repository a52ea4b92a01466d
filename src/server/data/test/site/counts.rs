use super::*;

/// Tests per-contributor counts.
///
/// Expected: Ok(SiteCounts) with total 3, pending 1, approved 1 for the researcher
#[tokio::test]
async fn counts_contributor_sites_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    for status in ["pending", "approved", "rejected"] {
        factory::site::SiteFactory::new(db)
            .created_by(researcher.user_id)
            .status(status)
            .build()
            .await?;
    }
    factory::site::create_site(db).await?;

    let repo = SiteRepository::new(db);
    let counts = repo.counts_by_contributor(researcher.user_id).await?;

    assert_eq!(counts.total, 3);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.approved, 1);

    assert_eq!(repo.count(None).await?, 4);
    assert_eq!(repo.count(Some(SiteStatus::Approved)).await?, 2);

    Ok(())
}

/// Tests counts for a researcher without submissions.
///
/// Expected: Ok(SiteCounts::default())
#[tokio::test]
async fn returns_zero_counts_without_sites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let researcher = factory::user::create_user_with_role(db, "researcher").await?;

    let counts = SiteRepository::new(db)
        .counts_by_contributor(researcher.user_id)
        .await?;

    assert_eq!(counts, Default::default());

    Ok(())
}
