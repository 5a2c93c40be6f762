use crate::message::{ChatRequest, ChatResponse, Location};

pub fn greeting(user: &str, question: &str) -> String {
    format!("Hello {}, you asked: '{}'", user, question)
}

/// Builds the echo reply. Pure: the same request always gives the same response.
pub fn generate_reply(request: &ChatRequest) -> ChatResponse {
    ChatResponse {
        question: request.question.clone(),
        longitude: request.longitude,
        latitude: request.latitude,
        user: request.user.clone(),
        message: greeting(&request.user, &request.question),
        location: Location {
            latitude: request.latitude,
            longitude: request.longitude,
        },
    }
}
