use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::message::ChatRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(StatusCode),

    #[error("response body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Anything the form can send a request to.
pub trait Responder {
    fn submit(&self, request: &ChatRequest) -> Result<Value, ClientError>;
}

/// Blocking HTTP client for the chatbot endpoint. Uses the transport's
/// default timeout.
pub struct ResponderClient {
    http: Client,
    endpoint: String,
}

impl ResponderClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().build().map_err(ClientError::Transport)?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Responder for ResponderClient {
    fn submit(&self, request: &ChatRequest) -> Result<Value, ClientError> {
        debug!(endpoint = %self.endpoint, "sending chatbot request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| {
                warn!("chatbot request failed: {}", e);
                ClientError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "chatbot endpoint returned an error status");
            return Err(ClientError::Status(status));
        }

        response.json::<Value>().map_err(|e| {
            warn!("chatbot response could not be decoded: {}", e);
            ClientError::Decode(e)
        })
    }
}
