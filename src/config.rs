//! Fixed addresses and defaults shared by the server and the client.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use tracing_subscriber::EnvFilter;

pub const BIND_ADDR: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000);
pub const CHATBOT_PATH: &str = "/chatbot";

/// Coordinates prefilled in the form (Jakarta).
pub const DEFAULT_LONGITUDE: f64 = 106.8456;
pub const DEFAULT_LATITUDE: f64 = -6.2088;

pub const LOG_FILE: &str = "chatbot-echo.log";
const DEFAULT_LOG_FILTER: &str = "info,chatbot_echo=debug";

/// Full URL of the chatbot route on a server bound to `addr`.
pub fn endpoint_url(addr: SocketAddr) -> String {
    format!("http://{}{}", addr, CHATBOT_PATH)
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub endpoint: String,
    pub log_file: String,
    pub log_filter: String,
}

impl AppConfig {
    /// Only the log filter comes from the environment (`RUST_LOG`); the
    /// address is fixed so the client always finds the server.
    pub fn from_env() -> Self {
        let bind_addr = SocketAddr::V4(BIND_ADDR);
        Self {
            bind_addr,
            endpoint: endpoint_url(bind_addr),
            log_file: LOG_FILE.to_string(),
            log_filter: std::env::var(EnvFilter::DEFAULT_ENV)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}
