//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::payment::{PaymentDto, PaymentStatus},
    server::{error::AppError, util::parse::parse_enum},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub payment_id: i32,
    pub user_id: i32,
    pub site_id: i32,
    pub amount: f64,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Result<Self, AppError> {
        Ok(Self {
            payment_id: entity.payment_id,
            user_id: entity.user_id,
            site_id: entity.site_id,
            amount: entity.amount,
            status: parse_enum("payments.status", entity.status, PaymentStatus::parse)?,
            created_at: entity.created_at,
        })
    }
}

/// Payment joined with the names shown in the admin payment table.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    pub payment: Payment,
    pub payer_name: Option<String>,
    pub site_name: Option<String>,
}

impl PaymentDetails {
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            payment_id: self.payment.payment_id,
            user_id: self.payment.user_id,
            payer_name: self.payer_name,
            site_id: self.payment.site_id,
            site_name: self.site_name,
            amount: self.payment.amount,
            status: self.payment.status,
            created_at: self.payment.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub user_id: i32,
    pub site_id: i32,
    pub amount: f64,
    pub status: PaymentStatus,
}

/// Filter for payment listings.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub user_id: Option<i32>,
    pub status: Option<PaymentStatus>,
}
