use super::*;

/// Tests that listed payments carry payer and site names.
///
/// Expected: Ok with the payer's full name and the site name resolved
#[tokio::test]
async fn resolves_payer_and_site_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = factory::user::UserFactory::new(db)
        .first_name("Selam")
        .last_name("Girma")
        .build()
        .await?;
    let site = factory::site::SiteFactory::new(db)
        .name("Simien Mountains")
        .build()
        .await?;
    factory::payment::create_payment(db, visitor.user_id, site.site_id).await?;

    let (payments, total) = PaymentRepository::new(db)
        .get_paginated(&PaymentFilter::default(), PageParam { page: 0, per_page: 10 })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(payments[0].payer_name.as_deref(), Some("Selam Girma"));
    assert_eq!(payments[0].site_name.as_deref(), Some("Simien Mountains"));

    Ok(())
}

/// Tests filtering by payer and status.
///
/// Expected: Ok with only the visitor's pending payment
#[tokio::test]
async fn filters_by_user_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    factory::payment::create_payment(db, visitor.user_id, site.site_id).await?;
    let pending = factory::payment::PaymentFactory::new(db, visitor.user_id, site.site_id)
        .status("pending")
        .build()
        .await?;
    factory::payment::PaymentFactory::new(db, other.user_id, site.site_id)
        .status("pending")
        .build()
        .await?;

    let filter = PaymentFilter {
        user_id: Some(visitor.user_id),
        status: Some(PaymentStatus::Pending),
    };
    let (payments, total) = PaymentRepository::new(db)
        .get_paginated(&filter, PageParam { page: 0, per_page: 10 })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(payments[0].payment.payment_id, pending.payment_id);

    Ok(())
}
