// src/config.rs

use std::env;
use std::net::{IpAddr, SocketAddr};
use dotenvy::dotenv;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let allowed_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string()),
        );

        Self {
            host,
            port,
            rust_log,
            log_dir,
            allowed_origins,
        }
    }

    /// Socket address to bind. Falls back to all interfaces if `host` is not an IP.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip: IpAddr = self.host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid HOST '{}', binding to 0.0.0.0", self.host);
            [0, 0, 0, 0].into()
        });
        SocketAddr::new(ip, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
