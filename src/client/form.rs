// src/client/form.rs
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use super::api::{ClientError, Responder};
use crate::config::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::message::ChatRequest;

pub const SERVER_ERROR_TEXT: &str = "Error: Unable to get response from the server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Question,
    Longitude,
    Latitude,
    User,
    Send,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Question,
        Field::Longitude,
        Field::Latitude,
        Field::User,
        Field::Send,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Question => "Ask a question:",
            Field::Longitude => "Enter longitude:",
            Field::Latitude => "Enter latitude:",
            Field::User => "Your name:",
            Field::Send => "Send",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Field::Longitude | Field::Latitude)
    }

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    AwaitingResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormWarning {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid number for {0}.")]
    InvalidNumber(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    None,
    Warning(FormWarning),
    Response(Value),
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Quit,
    ScrollUp,
    ScrollDown,
    ToggleDocs,
}

/// Form values live for the whole session; nothing is written anywhere.
#[derive(Debug, Clone)]
pub struct Form {
    pub question: String,
    pub longitude: String,
    pub latitude: String,
    pub user: String,
    pub focus: Field,
    pub phase: Phase,
    pub outcome: Outcome,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self {
            question: String::new(),
            longitude: DEFAULT_LONGITUDE.to_string(),
            latitude: DEFAULT_LATITUDE.to_string(),
            user: String::new(),
            focus: Field::Question,
            phase: Phase::Idle,
            outcome: Outcome::None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Question => &self.question,
            Field::Longitude => &self.longitude,
            Field::Latitude => &self.latitude,
            Field::User => &self.user,
            Field::Send => "",
        }
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Question => Some(&mut self.question),
            Field::Longitude => Some(&mut self.longitude),
            Field::Latitude => Some(&mut self.latitude),
            Field::User => Some(&mut self.user),
            Field::Send => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let focus = self.focus;
        if focus.is_numeric() && !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return;
        }
        if let Some(value) = self.value_mut(focus) {
            value.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(value) = self.value_mut(self.focus) {
            value.pop();
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.kind != KeyEventKind::Press {
            return FormAction::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FormAction::Quit,
            KeyCode::Esc => FormAction::Quit,
            KeyCode::PageUp => FormAction::ScrollUp,
            KeyCode::PageDown => FormAction::ScrollDown,
            KeyCode::F(1) => FormAction::ToggleDocs,
            KeyCode::Enter if self.focus == Field::Send => FormAction::Submit,
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                FormAction::None
            }
            KeyCode::Backspace => {
                self.delete_char();
                FormAction::None
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                FormAction::None
            }
            _ => FormAction::None,
        }
    }

    /// Checks the form and builds the request to send.
    pub fn validate(&self) -> Result<ChatRequest, FormWarning> {
        if self.question.is_empty() || self.user.is_empty() {
            return Err(FormWarning::MissingFields);
        }
        Ok(ChatRequest {
            question: self.question.clone(),
            longitude: parse_coordinate(&self.longitude, "longitude")?,
            latitude: parse_coordinate(&self.latitude, "latitude")?,
            user: self.user.clone(),
        })
    }

    /// Moves out of `Idle`. On success the form waits for a response and the
    /// caller must send the returned request; otherwise a warning is shown
    /// and the form is idle again.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        self.phase = Phase::Validating;
        match self.validate() {
            Ok(request) => {
                self.phase = Phase::AwaitingResponse;
                Some(request)
            }
            Err(warning) => {
                debug!("form not submitted: {}", warning);
                self.outcome = Outcome::Warning(warning);
                self.phase = Phase::Idle;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<Value, ClientError>) {
        self.outcome = match result {
            Ok(body) => Outcome::Response(body),
            Err(e) => {
                error!("chatbot request failed: {}", e);
                Outcome::Error
            }
        };
        self.phase = Phase::Idle;
    }

    /// Validates and, if the form is complete, performs exactly one call.
    pub fn submit<R: Responder>(&mut self, responder: &R) {
        if let Some(request) = self.begin_submit() {
            let result = responder.submit(&request);
            self.finish_submit(result);
        }
    }
}

fn parse_coordinate(raw: &str, name: &'static str) -> Result<f64, FormWarning> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FormWarning::InvalidNumber(name))
}
