use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("inference service returned status {status}: {body}")]
    Service { status: u16, body: String },

    #[error("inference response contained no text content")]
    EmptyResponse,

    #[error("inference response failed schema validation: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
}
