use std::net::{Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

const LISTEN_PORT: u16 = 5000;
const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Fixed process settings; nothing is read from the environment or disk.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// The only origin granted CORS access.
    pub allowed_origin: HeaderValue,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, LISTEN_PORT)),
            allowed_origin: HeaderValue::from_static(ALLOWED_ORIGIN),
        }
    }
}
