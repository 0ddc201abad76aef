//! Recommendation request workflow and the session recommendation log.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use tu_ai::{GenerateRequest, TextGenerator};

use crate::{build_recommendation_prompt, UserProfile};

pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates the states a single recommendation request moves through.
pub enum RequestStage {
    Idle,
    Validating,
    Rejected,
    Unconfigured,
    Calling,
    Succeeded,
    Archived,
    Failed,
}

impl RequestStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStage::Idle => "idle",
            RequestStage::Validating => "validating",
            RequestStage::Rejected => "rejected",
            RequestStage::Unconfigured => "unconfigured",
            RequestStage::Calling => "calling",
            RequestStage::Succeeded => "succeeded",
            RequestStage::Archived => "archived",
            RequestStage::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestStage::Rejected
                | RequestStage::Unconfigured
                | RequestStage::Archived
                | RequestStage::Failed
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Enumerates supported `RecommendationError` values.
pub enum RecommendationError {
    #[error("please fill in both your interests and your aptitude / career goals")]
    MissingInput,
    #[error("the Gemini API key is not configured; set GEMINI_API_KEY to enable AI recommendations")]
    Unconfigured,
    #[error("an error occurred while generating recommendations: {0}")]
    ServiceFailure(String),
}

impl RecommendationError {
    /// Terminal stage the request ended in.
    pub fn stage(&self) -> RequestStage {
        match self {
            RecommendationError::MissingInput => RequestStage::Rejected,
            RecommendationError::Unconfigured => RequestStage::Unconfigured,
            RecommendationError::ServiceFailure(_) => RequestStage::Failed,
        }
    }

    /// Follow-up advice shown under the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            RecommendationError::MissingInput => None,
            RecommendationError::Unconfigured => {
                Some("get a free key at https://aistudio.google.com/app/apikey")
            }
            RecommendationError::ServiceFailure(_) => Some("check that the API key is valid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One archived recommendation answer.
pub struct RecommendationRecord {
    pub timestamp: String,
    pub profile: UserProfile,
    pub result: String,
}

/// Append-only, insertion-ordered log of successful recommendations.
#[derive(Debug, Default)]
pub struct RecommendationLog {
    records: Mutex<Vec<RecommendationRecord>>,
}

impl RecommendationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn records(&self) -> Vec<RecommendationRecord> {
        self.lock().clone()
    }

    pub(crate) fn append(&self, record: RecommendationRecord) {
        self.lock().push(record);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecommendationRecord>> {
        // Records are only ever pushed whole, so a poisoned guard still holds a consistent log.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rejects profiles whose interests or aptitude are blank.
pub fn validate_request_input(profile: &UserProfile) -> Result<(), RecommendationError> {
    if profile.interests.trim().is_empty() || profile.aptitude.trim().is_empty() {
        return Err(RecommendationError::MissingInput);
    }
    Ok(())
}

/// Issues one generation call per request and archives successful answers.
#[derive(Clone)]
pub struct RecommendationClient {
    generator: Option<Arc<dyn TextGenerator>>,
    model: String,
    log: Arc<RecommendationLog>,
}

impl RecommendationClient {
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        model: impl Into<String>,
        log: Arc<RecommendationLog>,
    ) -> Self {
        Self {
            generator,
            model: model.into(),
            log,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn log(&self) -> &Arc<RecommendationLog> {
        &self.log
    }

    pub async fn request_recommendation(
        &self,
        profile: &UserProfile,
    ) -> Result<RecommendationRecord, RecommendationError> {
        debug!(
            stage = RequestStage::Idle.as_str(),
            model = %self.model,
            "recommendation request received"
        );
        debug!(stage = RequestStage::Validating.as_str(), "validating profile fields");
        if let Err(error) = validate_request_input(profile) {
            info!(stage = error.stage().as_str(), "recommendation request rejected");
            return Err(error);
        }
        let Some(generator) = self.generator.as_ref() else {
            warn!(
                stage = RequestStage::Unconfigured.as_str(),
                "recommendation requested without a configured generation service"
            );
            return Err(RecommendationError::Unconfigured);
        };

        let prompt = build_recommendation_prompt(profile);
        debug!(
            stage = RequestStage::Calling.as_str(),
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "calling generation service"
        );
        let response = match generator
            .generate(GenerateRequest::new(self.model.clone(), prompt))
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(
                    stage = RequestStage::Failed.as_str(),
                    error = %error,
                    "generation service call failed"
                );
                return Err(RecommendationError::ServiceFailure(error.to_string()));
            }
        };

        debug!(
            stage = RequestStage::Succeeded.as_str(),
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            "generation service answered"
        );

        let record = RecommendationRecord {
            timestamp: Local::now().format(RECORD_TIMESTAMP_FORMAT).to_string(),
            profile: profile.clone(),
            result: response.text,
        };
        self.log.append(record.clone());
        info!(
            stage = RequestStage::Archived.as_str(),
            archived = self.log.len(),
            output_tokens = response.usage.output_tokens,
            "recommendation archived"
        );
        Ok(record)
    }
}
