use std::sync::Arc;

use tracing::{info, warn};
use tu_ai::{
    GeminiClient, GeminiConfig, TextGenerator, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL,
};

/// Sentinel value shipped in sample env files; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_API_KEY";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved generation-service settings for one advisor session.
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub request_timeout_ms: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Returns the trimmed key, or `None` when it is blank or the placeholder.
pub fn normalize_api_key(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER_API_KEY {
        return None;
    }
    Some(trimmed.to_string())
}

impl AdvisorConfig {
    pub fn credential(&self) -> Option<String> {
        normalize_api_key(self.api_key.as_deref())
    }

    pub fn is_configured(&self) -> bool {
        self.credential().is_some()
    }

    /// Builds the Gemini generator, or `None` when the session is unconfigured.
    ///
    /// Client construction failures are logged and also leave the session
    /// unconfigured.
    pub fn build_generator(&self) -> Option<Arc<dyn TextGenerator>> {
        let Some(api_key) = self.credential() else {
            info!("no Gemini API key configured; AI recommendations are disabled");
            return None;
        };

        match GeminiClient::new(GeminiConfig {
            api_base: self.api_base.clone(),
            api_key,
            request_timeout_ms: self.request_timeout_ms,
        }) {
            Ok(client) => {
                let generator: Arc<dyn TextGenerator> = Arc::new(client);
                Some(generator)
            }
            Err(error) => {
                warn!(error = %error, "failed to configure Gemini client");
                None
            }
        }
    }
}
