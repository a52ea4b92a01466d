use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        assistant::{AssistantIntroDto, AssistantMessageDto, AssistantReplyDto},
    },
    server::{error::AppError, service::assistant::AssistantService},
};

/// Tag for grouping assistant endpoints in OpenAPI documentation
pub static ASSISTANT_TAG: &str = "assistant";

#[utoipa::path(
    get,
    path = "/api/assistant/topics",
    tag = ASSISTANT_TAG,
    responses(
        (status = 200, description = "Greeting and suggested topics", body = AssistantIntroDto)
    ),
)]
pub async fn get_topics() -> impl IntoResponse {
    (StatusCode::OK, Json(AssistantService::intro()))
}

/// Scripted answer to a visitor question.
#[utoipa::path(
    post,
    path = "/api/assistant/messages",
    tag = ASSISTANT_TAG,
    request_body = AssistantMessageDto,
    responses(
        (status = 200, description = "Assistant reply", body = AssistantReplyDto),
        (status = 400, description = "Message is blank", body = ErrorDto)
    ),
)]
pub async fn send_message(
    Json(payload): Json<AssistantMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let reply = AssistantService::reply(&payload.message)?;

    Ok((
        StatusCode::OK,
        Json(AssistantReplyDto {
            reply: reply.to_string(),
        }),
    ))
}
