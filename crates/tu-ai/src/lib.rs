//! Text-generation client layer for the TU learning-design advisor.
mod google;
mod types;

pub use google::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
pub use types::{GenerateRequest, GenerateResponse, GenerateUsage, TextGenerator, TuAiError};
