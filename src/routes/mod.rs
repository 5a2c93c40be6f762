// src/routes/mod.rs
pub mod chat;

use axum::{Router, routing::post};
use chat::chatbot_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::CHATBOT_PATH;

pub fn create_router() -> Router {
    Router::new()
        .route(CHATBOT_PATH, post(chatbot_handler))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
