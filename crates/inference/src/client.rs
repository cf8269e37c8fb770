use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use tegaki_encoder::EncodedPart;
use tegaki_review_domain::Feedback;

use crate::TextReviewer;
use crate::config::GeminiConfig;
use crate::error::InferenceError;
use crate::schema::{REVIEW_PROMPT, response_schema};

// -- Wire types for models/{model}:generateContent --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

/// Async HTTP client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, InferenceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Client against the environment-configured endpoint and key.
    pub fn from_env() -> Result<Self, InferenceError> {
        Self::new(GeminiConfig::from_env()?)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, part: &EncodedPart) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: part.mime_type.clone(),
                            data: part.data.clone(),
                        }),
                        ..Part::default()
                    },
                    Part {
                        text: Some(REVIEW_PROMPT.to_string()),
                        ..Part::default()
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl TextReviewer for GeminiClient {
    async fn review(&self, part: &EncodedPart) -> Result<Feedback, InferenceError> {
        let body = self.build_request(part);

        tracing::debug!(
            model = %self.config.model,
            mime_type = %part.mime_type,
            payload_len = part.data.len(),
            "dispatching generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(InferenceError::Service {
                status: status.as_u16(),
                body: raw,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
        let text = parsed.text().ok_or(InferenceError::EmptyResponse)?;

        // Fail closed: the text must promote to the full Feedback shape.
        Ok(Feedback::parse(text)?)
    }
}
