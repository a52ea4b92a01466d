use super::*;

/// Tests recording a payment.
///
/// Expected: Ok(Payment) with the given amount and Completed status
#[tokio::test]
async fn records_completed_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = factory::user::create_user(db).await?;
    let site = factory::site::create_site(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParam {
            user_id: visitor.user_id,
            site_id: site.site_id,
            amount: 250.0,
            status: PaymentStatus::Completed,
        })
        .await?;

    assert_eq!(payment.amount, 250.0);
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(repo.find_by_id(payment.payment_id).await?, Some(payment));

    Ok(())
}

/// Tests updating a payment status.
///
/// Expected: Ok(Some) for an existing payment, Ok(None) for a missing one
#[tokio::test]
async fn sets_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, payment) = factory::helpers::create_payment_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);

    let updated = repo
        .set_status(payment.payment_id, PaymentStatus::Failed)
        .await?;
    assert_eq!(updated.unwrap().status, PaymentStatus::Failed);

    let missing = repo.set_status(9999, PaymentStatus::Failed).await?;
    assert!(missing.is_none());

    Ok(())
}
