//! Server configuration from environment.

use std::env;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_addr: IpAddr,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
    /// Upper bound on legs accepted in one request
    pub max_legs: usize,
    pub cors_permissive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            log_json: false,
            max_legs: 500,
            cors_permissive: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("WAYGEN_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            bind_addr: env::var("WAYGEN_BIND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bind_addr),
            log_json: env_flag("WAYGEN_LOG_JSON").unwrap_or(defaults.log_json),
            max_legs: env::var("WAYGEN_MAX_LEGS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_legs),
            cors_permissive: env_flag("WAYGEN_CORS_PERMISSIVE").unwrap_or(defaults.cors_permissive),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = env::var(name).ok()?;
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
