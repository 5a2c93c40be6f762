// src/services/mod.rs
pub mod chatbot;
