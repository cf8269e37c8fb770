mod client;
mod config;
mod error;
mod schema;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::InferenceError;

use async_trait::async_trait;
use tegaki_encoder::EncodedPart;
use tegaki_review_domain::Feedback;

/// The seam between the orchestrator and the inference service.
///
/// One call maps to exactly one service invocation: no retries, no caching,
/// no deduplication of identical inputs.
#[async_trait]
pub trait TextReviewer: Send + Sync {
    async fn review(&self, part: &EncodedPart) -> Result<Feedback, InferenceError>;
}
