use crate::{
    model::payment::PaymentStatus,
    server::{
        data::payment::PaymentRepository,
        error::AppError,
        model::{
            payment::{CreatePaymentParam, PaymentFilter},
            PageParam,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod totals;
