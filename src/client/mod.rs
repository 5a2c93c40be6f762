// src/client/mod.rs
pub mod api;
pub mod form;
pub mod ui;
