use super::*;

/// Tests counting and summing completed payments.
///
/// Expected: Ok with 2 completed payments totalling 300.0
#[tokio::test]
async fn sums_completed_payments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    for (amount, status) in [(100.0, "completed"), (200.0, "completed"), (75.0, "failed")] {
        factory::payment::PaymentFactory::new(db, visitor.user_id, site.site_id)
            .amount(amount)
            .status(status)
            .build()
            .await?;
    }

    let repo = PaymentRepository::new(db);

    assert_eq!(repo.count_by_status(PaymentStatus::Completed).await?, 2);
    assert_eq!(repo.sum_by_status(PaymentStatus::Completed).await?, 300.0);
    assert_eq!(repo.sum_by_status(PaymentStatus::Failed).await?, 75.0);

    Ok(())
}

/// Tests the sum over an empty table.
///
/// Expected: Ok(0.0)
#[tokio::test]
async fn sum_is_zero_without_payments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentRepository::new(db);

    assert_eq!(repo.sum_by_status(PaymentStatus::Completed).await?, 0.0);
    assert_eq!(repo.count_by_status(PaymentStatus::Completed).await?, 0);

    Ok(())
}

/// Tests that deleting a payer removes their payments from the revenue totals.
///
/// Expected: Ok(0.0) and no payment rows after the visitor is deleted
#[tokio::test]
async fn deleting_payer_removes_their_revenue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (visitor, _site, payment) = factory::helpers::create_payment_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    assert!(repo.sum_by_status(PaymentStatus::Completed).await? > 0.0);

    crate::server::data::user::UserRepository::new(db)
        .delete(visitor.user_id)
        .await?;

    assert!(repo.find_by_id(payment.payment_id).await?.is_none());
    assert_eq!(repo.sum_by_status(PaymentStatus::Completed).await?, 0.0);

    Ok(())
}
