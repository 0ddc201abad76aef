use serde::{Deserialize, Serialize};
use thiserror::Error;

const DESIGNER_SUBJECTS: &[&str] = &[
    "Data Analysis",
    "Programming",
    "Marketing",
    "Business Strategy",
    "AI Fundamentals",
    "Web Development",
];

/// Subjects a student may combine into a self-designed module.
pub fn designer_subjects() -> &'static [&'static str] {
    DESIGNER_SUBJECTS
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("enter a module name")]
    MissingName,
    #[error("pick at least one subject for the module")]
    MissingSubjects,
    #[error("'{0}' is not an available subject")]
    UnknownSubject(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A validated, student-designed convergence module.
pub struct ModuleDraft {
    pub name: String,
    pub description: String,
    pub subjects: Vec<String>,
}

impl ModuleDraft {
    /// Validates the draft and normalizes subject spelling to the catalog's.
    pub fn new<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        subjects: I,
    ) -> Result<Self, DesignError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DesignError::MissingName);
        }

        let mut normalized: Vec<String> = Vec::new();
        for subject in subjects {
            let raw = subject.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            let canonical = DESIGNER_SUBJECTS
                .iter()
                .find(|candidate| candidate.eq_ignore_ascii_case(raw))
                .ok_or_else(|| DesignError::UnknownSubject(raw.to_string()))?;
            if !normalized.iter().any(|held| held == canonical) {
                normalized.push((*canonical).to_string());
            }
        }
        if normalized.is_empty() {
            return Err(DesignError::MissingSubjects);
        }

        Ok(Self {
            name,
            description: description.into(),
            subjects: normalized,
        })
    }
}
