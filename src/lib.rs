pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod server;
pub mod services;
