//! Configuration module
//!
//! Environment-driven configuration for the API service. Every knob has a
//! default so the service starts with no environment at all; load a `.env`
//! file with `dotenvy` before calling [`Config::from_env`].

use std::env;

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PREVIEW_SWEEP_INTERVAL_SECS, DEFAULT_PREVIEW_TTL_SECS,
};

const DEFAULT_SERVER_PORT: u16 = 8080;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    /// Base URL used when building preview links returned to clients.
    pub public_base_url: String,
    /// Time-to-live for stored previews, in seconds.
    pub preview_ttl_secs: u64,
    /// Interval between preview sweeper wake-ups, in seconds.
    pub preview_sweep_interval_secs: u64,
    /// Timeout for outbound photo downloads, in seconds.
    pub fetch_timeout_secs: u64,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", server_port));

        let preview_ttl_secs = parse_env_u64("PREVIEW_TTL_SECS", DEFAULT_PREVIEW_TTL_SECS)?;
        let preview_sweep_interval_secs = parse_env_u64(
            "PREVIEW_SWEEP_INTERVAL_SECS",
            DEFAULT_PREVIEW_SWEEP_INTERVAL_SECS,
        )?;
        let fetch_timeout_secs = parse_env_u64("FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?;

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            server_port,
            cors_origins,
            public_base_url,
            preview_ttl_secs,
            preview_sweep_interval_secs,
            fetch_timeout_secs,
            environment,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, anyhow::Error> {
    match env::var(name) {
        Ok(v) => v
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
