//! Session core for the TU learning-design advisor.
//!
//! Owns the editable student profile, renders the curriculum recommendation
//! prompt, forwards it to a `TextGenerator`, and archives successful answers in
//! a session-scoped log. The static catalog and dashboard data that the shell
//! renders alongside the workflow also live here.

mod cart;
mod catalog;
mod config;
mod dashboard;
mod design;
mod profile;
mod prompt;
mod recommendation;
mod session;

pub use cart::{CartAddOutcome, CartError, ModuleCart};
pub use catalog::{catalog_modules, find_module, search_modules, CatalogModule};
pub use config::{normalize_api_key, AdvisorConfig, PLACEHOLDER_API_KEY};
pub use dashboard::{
    completed_modules, credit_summary, learning_history, module_progress, suggested_modules,
    ComponentStatus, CompletedModule, CourseOutcome, CourseRecord, CreditSummary, ModuleComponent,
    ModuleProgress, SuggestedModule, TermRecord, STUDENT_NAME,
};
pub use design::{designer_subjects, DesignError, ModuleDraft};
pub use profile::{ProfileStore, UserProfile, DEFAULT_MAJOR};
pub use prompt::build_recommendation_prompt;
pub use recommendation::{
    validate_request_input, RecommendationClient, RecommendationError, RecommendationLog,
    RecommendationRecord, RequestStage, RECORD_TIMESTAMP_FORMAT,
};
pub use session::{SessionContext, View, ViewParseError};
