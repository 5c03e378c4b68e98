// src/config.rs
use std::{env, net::SocketAddr};

use thiserror::Error;

use crate::infrastructure::assistant::DEFAULT_GEMINI_MODEL;

/// Placeholder left behind by setup templates; treated the same as no key.
const PLACEHOLDER_KEY_MARKER: &str = "YOUR_API_KEY";

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    allowed_origins: Vec<String>,
    gemini_api_key: Option<String>,
    gemini_model: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Everything has a
    /// default except the assistant credential, whose absence is itself a
    /// valid state: it disables the assistant instead of failing startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("LISTEN_ADDR is not an address: {listen_addr}")))?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty() && !key.contains(PLACEHOLDER_KEY_MARKER));

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        Ok(Self {
            listen_addr,
            allowed_origins,
            gemini_api_key,
            gemini_model,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// `None` when the key is unset, blank, or still the template
    /// placeholder; the assistant is disabled in that case.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }

    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }
}
