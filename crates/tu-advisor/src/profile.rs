use serde::{Deserialize, Serialize};

pub const DEFAULT_MAJOR: &str = "Early Childhood Education";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Editable student profile that drives recommendation prompts.
pub struct UserProfile {
    pub major: String,
    pub interests: String,
    pub aptitude: String,
}

impl UserProfile {
    pub fn new(
        major: impl Into<String>,
        interests: impl Into<String>,
        aptitude: impl Into<String>,
    ) -> Self {
        Self {
            major: major.into(),
            interests: interests.into(),
            aptitude: aptitude.into(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_MAJOR, "", "")
    }
}

/// Session-scoped holder of the current `UserProfile`.
///
/// Performs no validation; callers check required fields before submitting.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    current: UserProfile,
}

impl ProfileStore {
    pub fn get(&self) -> UserProfile {
        self.current.clone()
    }

    /// Replaces all three fields at once and returns the stored profile.
    pub fn update(
        &mut self,
        major: impl Into<String>,
        interests: impl Into<String>,
        aptitude: impl Into<String>,
    ) -> UserProfile {
        self.current = UserProfile::new(major, interests, aptitude);
        self.current.clone()
    }
}
