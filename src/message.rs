// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /chatbot`. Field names on the wire are the short ones.
/// `long` and `lat` must be JSON numbers; numeric strings like `"106.8"` are
/// rejected rather than coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "long")]
    pub longitude: f64,
    #[serde(rename = "lat")]
    pub latitude: f64,
    pub user: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

// Field order here is the order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub question: String,
    pub longitude: f64,
    pub latitude: f64,
    pub user: String,
    pub message: String,
    pub location: Location,
}
