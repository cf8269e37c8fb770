use std::time::Duration;

use crate::error::InferenceError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model and sampling settings are fixed product configuration, not
/// user-exposed knobs.
pub const MODEL: &str = "gemini-2.5-flash";
pub const TEMPERATURE: f32 = 0.7;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for [`GeminiClient`](crate::GeminiClient).
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Service endpoint; overridable for proxies and tests.
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
    /// Whole-request timeout enforced by the HTTP transport.
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: MODEL.to_string(),
            api_key: String::new(),
            temperature: TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GeminiConfig {
    /// Build from the environment. `GEMINI_API_KEY` is required;
    /// `GEMINI_BASE_URL` optionally overrides the endpoint.
    pub fn from_env() -> Result<Self, InferenceError> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| InferenceError::MissingApiKey)?;
        let mut config = Self {
            api_key,
            ..Self::default()
        };
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }
}
