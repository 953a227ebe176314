// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: u64,
    /// Whether to load the demo dataset at startup
    pub seed_demo_data: bool,
}

const DEFAULT_ACCESS_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_REFRESH_TTL_SECS: u64 = 30 * 24 * 60 * 60;

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            access_token_ttl_secs: env::var("ACCESS_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ACCESS_TTL_SECS),
            refresh_token_ttl_secs: env::var("REFRESH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_TTL_SECS),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }

    /// Default config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8000,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            access_token_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
            seed_demo_data: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
