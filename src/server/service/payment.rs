//! Entrance fee payments.

use sea_orm::DatabaseConnection;

use crate::{
    model::{notification::NotificationKind, payment::PaymentStatus, site::SiteStatus},
    server::{
        data::{
            notification::NotificationRepository, payment::PaymentRepository,
            site::SiteRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            notification::CreateNotificationParam,
            payment::{CreatePaymentParam, PaymentDetails, PaymentFilter},
            user::User,
            PageParam, Paginated,
        },
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a completed payment by the user for an approved site.
    ///
    /// Admins receive a `payment` notification.
    ///
    /// # Returns
    /// - `Ok(PaymentDetails)` - The recorded payment with payer and site names
    /// - `Err(AppError::BadRequest)` - Amount is not a positive number
    /// - `Err(AppError::NotFound)` - Site missing or not approved
    pub async fn pay(
        &self,
        payer: &User,
        site_id: i32,
        amount: f64,
    ) -> Result<PaymentDetails, AppError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::BadRequest(
                "Amount must be greater than zero".to_string(),
            ));
        }

        let site = SiteRepository::new(self.db)
            .find_by_id(site_id)
            .await?
            .filter(|site| site.status == SiteStatus::Approved)
            .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

        let payment = PaymentRepository::new(self.db)
            .create(CreatePaymentParam {
                user_id: payer.user_id,
                site_id: site.site_id,
                amount,
                status: PaymentStatus::Completed,
            })
            .await?;

        NotificationRepository::new(self.db)
            .create(CreateNotificationParam::for_admins(
                NotificationKind::Payment,
                "Payment received",
                format!(
                    "{} paid {:.2} ETB for {}",
                    payer.full_name(),
                    amount,
                    site.name
                ),
            ))
            .await?;

        tracing::info!(
            "User {} paid {:.2} for site {}",
            payer.user_id,
            amount,
            site.site_id
        );

        Ok(PaymentDetails {
            payment,
            payer_name: Some(payer.full_name()),
            site_name: Some(site.name),
        })
    }

    /// Payments newest first, with payer and site names.
    pub async fn get_payments(
        &self,
        filter: PaymentFilter,
        page: PageParam,
    ) -> Result<Paginated<PaymentDetails>, AppError> {
        let (payments, total) = PaymentRepository::new(self.db)
            .get_paginated(&filter, page)
            .await?;

        Ok(Paginated::new(payments, total, page))
    }

    /// Changes a payment's status.
    ///
    /// # Returns
    /// - `Ok(PaymentDetails)` - The updated payment with payer and site names
    /// - `Err(AppError::NotFound)` - No payment with that id
    pub async fn set_status(
        &self,
        payment_id: i32,
        status: PaymentStatus,
    ) -> Result<PaymentDetails, AppError> {
        let payment_repo = PaymentRepository::new(self.db);

        if payment_repo.set_status(payment_id, status).await?.is_none() {
            return Err(AppError::NotFound("Payment not found".to_string()));
        }

        tracing::info!("Payment {} marked {}", payment_id, status.as_str());

        payment_repo
            .find_details_by_id(payment_id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "Payment",
                    id: payment_id,
                }
                .into()
            })
    }
}
