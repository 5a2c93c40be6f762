use axum::{Json, extract::rejection::JsonRejection};
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
};

pub async fn chatbot_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(status = %rejection.status(), "rejected chatbot request");
        AppError::from(rejection)
    })?;

    Ok(Json(generate_reply(&request)))
}
