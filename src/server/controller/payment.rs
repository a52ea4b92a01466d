use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        payment::{CreatePaymentDto, PaymentDto, PaymentStatus, UpdatePaymentStatusDto},
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            payment::{PaymentDetails, PaymentFilter},
            PageParam,
        },
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

#[derive(Deserialize)]
pub struct PaymentListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub status: Option<PaymentStatus>,
}

/// Pay for a visit to an approved site.
///
/// Admins receive a payment notification.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentDto),
        (status = 400, description = "Amount is not positive", body = ErrorDto),
        (status = 404, description = "Site not found or not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let payer = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let payment = PaymentService::new(&state.db)
        .pay(&payer, payload.site_id, payload.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

/// The caller's own payments, newest first.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of payments", body = PaginatedDto<PaymentDto>),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_payments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filter = PaymentFilter {
        user_id: Some(user.user_id),
        status: None,
    };
    let payments = PaymentService::new(&state.db)
        .get_payments(filter, params.page_param()?)
        .await?;

    Ok((StatusCode::OK, Json(payments.into_dto(PaymentDetails::into_dto))))
}

/// All payments with site and payer names.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/payments",
    tag = PAYMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("status" = Option<PaymentStatus>, Query, description = "Only payments with this status")
    ),
    responses(
        (status = 200, description = "Page of payments", body = PaginatedDto<PaymentDto>),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaymentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let filter = PaymentFilter {
        user_id: None,
        status: params.status,
    };
    let payments = PaymentService::new(&state.db)
        .get_payments(
            filter,
            PageParam::from_query(params.page, params.entries)?,
        )
        .await?;

    Ok((StatusCode::OK, Json(payments.into_dto(PaymentDetails::into_dto))))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/payments/{payment_id}/status",
    tag = PAYMENT_TAG,
    params(
        ("payment_id" = i32, Path, description = "Payment ID")
    ),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Updated payment", body = PaymentDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    session: Session,
    Path(payment_id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let payment = PaymentService::new(&state.db)
        .set_status(payment_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(payment.into_dto())))
}
