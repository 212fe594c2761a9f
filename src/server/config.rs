use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_OLLAMA_URL: &str = "http://dgiapp-ollama-1:11434/api/generate";
const DEFAULT_OLLAMA_MODEL: &str = "llama2";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRATION_SECONDS: i64 = 86_400;
const DEFAULT_OLLAMA_TIMEOUT_SECONDS: u64 = 120;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Signing secret for bearer tokens. `None` means a per-boot secret is generated.
    pub jwt_secret: Option<String>,
    pub jwt_expiration_seconds: i64,

    pub ollama_url: Url,
    pub ollama_model: String,
    /// Upper bound on a single generation call, connection included.
    pub ollama_timeout: Duration,

    /// Origin allowed by CORS. `None` allows any origin.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiration_seconds = match std::env::var("JWT_EXPIRATION_SECONDS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRATION_SECONDS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_JWT_EXPIRATION_SECONDS,
        };

        let ollama_url = std::env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.into());
        let ollama_url = Url::parse(&ollama_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "OLLAMA_URL".to_string(),
            reason: e.to_string(),
        })?;

        let ollama_timeout_seconds = match std::env::var("OLLAMA_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "OLLAMA_TIMEOUT_SECONDS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_OLLAMA_TIMEOUT_SECONDS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            jwt_expiration_seconds,
            ollama_url,
            ollama_model: std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string()),
            ollama_timeout: Duration::from_secs(ollama_timeout_seconds),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|s| !s.is_empty()),
        })
    }
}
