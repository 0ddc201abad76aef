use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::{
    validate_request_input, ModuleCart, ModuleDraft, ProfileStore, RecommendationClient,
    RecommendationError, RecommendationRecord, UserProfile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Enumerates the screens of the advisor shell.
pub enum View {
    #[default]
    Dashboard,
    LearningHistory,
    ModuleExplorer,
    ModuleCart,
    ModuleDesigner,
    AiRecommendation,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Dashboard,
        View::LearningHistory,
        View::ModuleExplorer,
        View::ModuleCart,
        View::ModuleDesigner,
        View::AiRecommendation,
    ];

    /// Short identifier accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::LearningHistory => "history",
            View::ModuleExplorer => "modules",
            View::ModuleCart => "cart",
            View::ModuleDesigner => "design",
            View::AiRecommendation => "recommend",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::LearningHistory => "Learning History",
            View::ModuleExplorer => "Module Explorer",
            View::ModuleCart => "Module Cart",
            View::ModuleDesigner => "My Module Design",
            View::AiRecommendation => "AI Recommendations",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown view '{0}'. Available views: dashboard, history, modules, cart, design, recommend")]
pub struct ViewParseError(pub String);

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == normalized)
            .ok_or_else(|| ViewParseError(value.trim().to_string()))
    }
}

/// Explicitly owned state of one advisor session.
pub struct SessionContext {
    view: View,
    profile: ProfileStore,
    cart: ModuleCart,
    designs: Vec<ModuleDraft>,
    recommender: RecommendationClient,
}

impl SessionContext {
    pub fn new(recommender: RecommendationClient) -> Self {
        Self {
            view: View::default(),
            profile: ProfileStore::default(),
            cart: ModuleCart::default(),
            designs: Vec::new(),
            recommender,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        debug!(from = self.view.as_str(), to = view.as_str(), "view change");
        self.view = view;
    }

    pub fn profile(&self) -> UserProfile {
        self.profile.get()
    }

    pub fn cart(&self) -> &ModuleCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut ModuleCart {
        &mut self.cart
    }

    pub fn designs(&self) -> &[ModuleDraft] {
        &self.designs
    }

    pub fn save_design(&mut self, draft: ModuleDraft) -> &ModuleDraft {
        self.designs.push(draft);
        &self.designs[self.designs.len() - 1]
    }

    pub fn recommender(&self) -> &RecommendationClient {
        &self.recommender
    }

    pub fn recommendations(&self) -> Vec<RecommendationRecord> {
        self.recommender.log().records()
    }

    /// Submits the typed-in profile fields for a recommendation.
    ///
    /// The stored profile only changes once the fields pass validation and a
    /// generation service is configured.
    pub async fn submit_recommendation(
        &mut self,
        major: &str,
        interests: &str,
        aptitude: &str,
    ) -> Result<RecommendationRecord, RecommendationError> {
        validate_request_input(&UserProfile::new(major, interests, aptitude))?;
        if !self.recommender.is_configured() {
            return Err(RecommendationError::Unconfigured);
        }
        let profile = self.profile.update(major, interests, aptitude);
        self.recommender.request_recommendation(&profile).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{SessionContext, View, ViewParseError};
    use crate::{
        ModuleDraft, RecommendationClient, RecommendationError, RecommendationLog, DEFAULT_MAJOR,
    };

    fn unconfigured_session() -> SessionContext {
        SessionContext::new(RecommendationClient::new(
            None,
            "gemini-test",
            Arc::new(RecommendationLog::new()),
        ))
    }

    #[test]
    fn parses_every_view_identifier() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
        assert_eq!(" Modules ".parse::<View>(), Ok(View::ModuleExplorer));
        assert_eq!(
            "settings".parse::<View>(),
            Err(ViewParseError("settings".to_string()))
        );
    }

    #[test]
    fn new_session_starts_on_dashboard_with_default_profile() {
        let session = unconfigured_session();
        assert_eq!(session.view(), View::Dashboard);
        assert_eq!(session.profile().major, DEFAULT_MAJOR);
        assert!(session.recommendations().is_empty());
    }

    #[test]
    fn navigation_switches_views() {
        let mut session = unconfigured_session();
        session.navigate(View::AiRecommendation);
        assert_eq!(session.view(), View::AiRecommendation);
        assert_eq!(session.view().to_string(), "AI Recommendations");
    }

    #[test]
    fn saved_designs_accumulate() {
        let mut session = unconfigured_session();
        let draft = ModuleDraft::new("EdTech", "", ["Programming"]).expect("valid draft");
        assert_eq!(session.save_design(draft).name, "EdTech");
        assert_eq!(session.designs().len(), 1);
    }

    #[tokio::test]
    async fn unconfigured_submit_leaves_profile_untouched() {
        let mut session = unconfigured_session();
        let error = session
            .submit_recommendation("Business", "marketing", "founder")
            .await
            .expect_err("no generator configured");

        assert_eq!(error, RecommendationError::Unconfigured);
        assert_eq!(session.profile().major, DEFAULT_MAJOR);
        assert!(session.profile().interests.is_empty());
    }

    #[tokio::test]
    async fn missing_input_submit_leaves_profile_untouched() {
        let mut session = unconfigured_session();
        let error = session
            .submit_recommendation("Business", "", "founder")
            .await
            .expect_err("empty interests");

        assert_eq!(error, RecommendationError::MissingInput);
        assert!(session.profile().aptitude.is_empty());
    }
}
