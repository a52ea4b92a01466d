//! Payment data repository for database operations.
//!
//! Provides the `PaymentRepository` for recording payments, listing them with payer and
//! site names for the admin table, and aggregating revenue for the dashboard.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::payment::PaymentStatus,
    server::{
        error::AppError,
        model::{
            payment::{CreatePaymentParam, Payment, PaymentDetails, PaymentFilter},
            PageParam,
        },
    },
};

/// Repository providing database operations for payments.
pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment.
    pub async fn create(&self, param: CreatePaymentParam) -> Result<Payment, AppError> {
        let entity = entity::payment::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            site_id: ActiveValue::Set(param.site_id),
            amount: ActiveValue::Set(param.amount),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Payment::from_entity(entity)
    }

    pub async fn find_by_id(&self, payment_id: i32) -> Result<Option<Payment>, AppError> {
        let entity = entity::prelude::Payment::find_by_id(payment_id)
            .one(self.db)
            .await?;

        entity.map(Payment::from_entity).transpose()
    }

    /// Gets payments newest first with payer and site names.
    ///
    /// Names are resolved with one `IN` query per table for the page. Payments are deleted
    /// together with their payer or site, so both names are normally present.
    ///
    /// # Returns
    /// - `Ok((payments, total))` - Payments for the requested page and the total matching row count
    pub async fn get_paginated(
        &self,
        filter: &PaymentFilter,
        page: PageParam,
    ) -> Result<(Vec<PaymentDetails>, u64), AppError> {
        let mut query = entity::prelude::Payment::find()
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::PaymentId);

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::payment::Column::UserId.eq(user_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::payment::Column::Status.eq(status.as_str()));
        }

        let paginator = query.paginate(self.db, page.per_page.max(1));
        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;

        let payments = entities
            .into_iter()
            .map(Payment::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let details = self.with_names(payments).await?;

        Ok((details, total))
    }

    /// Finds a payment together with its payer and site names.
    pub async fn find_details_by_id(
        &self,
        payment_id: i32,
    ) -> Result<Option<PaymentDetails>, AppError> {
        let Some(payment) = self.find_by_id(payment_id).await? else {
            return Ok(None);
        };

        Ok(self.with_names(vec![payment]).await?.pop())
    }

    async fn with_names(&self, payments: Vec<Payment>) -> Result<Vec<PaymentDetails>, AppError> {
        let user_ids: Vec<i32> = payments.iter().map(|p| p.user_id).collect();
        let site_ids: Vec<i32> = payments.iter().map(|p| p.site_id).collect();

        let payers: HashMap<i32, String> = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        let sites: HashMap<i32, String> = entity::prelude::Site::find()
            .filter(entity::site::Column::SiteId.is_in(site_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.site_id, s.name))
            .collect();

        Ok(payments
            .into_iter()
            .map(|payment| PaymentDetails {
                payer_name: payers.get(&payment.user_id).cloned(),
                site_name: sites.get(&payment.site_id).cloned(),
                payment,
            })
            .collect())
    }

    /// Sets the status of a payment.
    ///
    /// # Returns
    /// - `Ok(Some(Payment))` - The updated payment
    /// - `Ok(None)` - No payment with that id
    pub async fn set_status(
        &self,
        payment_id: i32,
        status: PaymentStatus,
    ) -> Result<Option<Payment>, AppError> {
        let result = entity::prelude::Payment::update_many()
            .filter(entity::payment::Column::PaymentId.eq(payment_id))
            .col_expr(entity::payment::Column::Status, Expr::value(status.as_str()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(payment_id).await
    }

    /// Counts payments with the given status.
    pub async fn count_by_status(&self, status: PaymentStatus) -> Result<u64, AppError> {
        let count = entity::prelude::Payment::find()
            .filter(entity::payment::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Sums the amounts of payments with the given status, `0.0` when there are none.
    pub async fn sum_by_status(&self, status: PaymentStatus) -> Result<f64, AppError> {
        let total: Option<Option<f64>> = entity::prelude::Payment::find()
            .select_only()
            .column_as(entity::payment::Column::Amount.sum(), "total")
            .filter(entity::payment::Column::Status.eq(status.as_str()))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }
}
