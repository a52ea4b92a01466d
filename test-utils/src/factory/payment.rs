//! Payment factory for creating test payment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payments.
///
/// Payments default to a completed payment of 100.0.
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    site_id: i32,
    amount: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> PaymentFactory<'a> {
    /// Creates a new PaymentFactory for an existing user and site.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, site_id: i32) -> Self {
        Self {
            db,
            user_id,
            site_id,
            amount: 100.0,
            status: "completed".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment status (`pending`, `completed`, `failed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            site_id: ActiveValue::Set(self.site_id),
            amount: ActiveValue::Set(self.amount),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a completed payment of 100.0.
pub async fn create_payment(
    db: &DatabaseConnection,
    user_id: i32,
    site_id: i32,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db, user_id, site_id).build().await
}
