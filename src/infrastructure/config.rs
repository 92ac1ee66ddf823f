//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::domain::value_objects::GenerationSettings;

pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_GROQ_MODEL: &str = "gemma2-9b-it";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API key
    pub groq_api_key: String,
    /// Groq API base URL (OpenAI-compatible)
    pub groq_base_url: String,
    /// Model used for story generation
    pub groq_model: String,

    /// Sampling parameters sent with every story request
    pub generation: GenerationSettings,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let groq_api_key = env::var("GROQ_API_KEY")
            .context("GROQ_API_KEY environment variable is required")?;
        if groq_api_key.trim().is_empty() {
            anyhow::bail!("GROQ_API_KEY environment variable is empty");
        }

        Ok(Self {
            groq_api_key,
            groq_base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),

            generation: GenerationSettings::from_env(),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "groq={} model={} port={}",
            self.groq_base_url, self.groq_model, self.server_port
        )
    }
}
