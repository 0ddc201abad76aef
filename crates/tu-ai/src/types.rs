use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Single-prompt generation request sent to a `TextGenerator`.
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
/// Token accounting reported by the generation service.
pub struct GenerateUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub text: String,
    pub finish_reason: Option<String>,
    pub usage: GenerateUsage,
}

impl GenerateResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
            usage: GenerateUsage::default(),
        }
    }
}

#[derive(Debug, Error)]
/// Enumerates supported `TuAiError` values.
pub enum TuAiError {
    #[error("missing API key")]
    MissingApiKey,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
/// Trait contract for a backend that turns one prompt into generated text.
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, TuAiError>;
}

#[cfg(test)]
mod tests {
    use super::{GenerateRequest, GenerateResponse, TuAiError};

    #[test]
    fn request_constructor_keeps_model_and_prompt() {
        let request = GenerateRequest::new("gemini-2.0-flash-exp", "hello");
        assert_eq!(request.model, "gemini-2.0-flash-exp");
        assert_eq!(request.prompt, "hello");
    }

    #[test]
    fn http_status_error_display_keeps_provider_body() {
        let error = TuAiError::HttpStatus {
            status: 403,
            body: "API key not valid".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "provider returned non-success status 403: API key not valid"
        );
    }

    #[test]
    fn text_response_has_empty_usage() {
        let response = GenerateResponse::text("SAMPLE");
        assert_eq!(response.text, "SAMPLE");
        assert_eq!(response.usage.total_tokens, 0);
        assert!(response.finish_reason.is_none());
    }
}
