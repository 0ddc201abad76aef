use crate::UserProfile;

const ADVISOR_PREAMBLE: &str =
    "You are an academic advisor who specializes in designing university learning paths.";

const RECOMMENDATION_REQUESTS: &str = "Recommend a learning path suited to this student:

1. **Two Micro-Degree (MD) recommendations**
   - Each MD is a small interdisciplinary module of 9-15 credit-units
   - Include a title, the contributing departments, and the reason for the recommendation

2. **One dual-major recommendation (about 36 credit-units)**
   - Explain which modules combine well into the dual major
   - Include a title, the composition, and the reason for the recommendation

3. **One minor recommendation (about 24 credit-units)**
   - Recommend a minor that complements the current major
   - Include a title, the composition, and the reason for the recommendation

Make every recommendation concrete and practical, tailored to the student's interests and career goals.
Format the answer as readable Markdown.";

/// Renders the curriculum recommendation prompt for `profile`.
///
/// Profile fields are inserted verbatim. No validation happens here; callers
/// reject empty interests or aptitude before building.
pub fn build_recommendation_prompt(profile: &UserProfile) -> String {
    format!(
        "{ADVISOR_PREAMBLE}\n\n\
         Student profile:\n\
         - Current major: {major}\n\
         - Interests: {interests}\n\
         - Aptitude / career goals: {aptitude}\n\n\
         {RECOMMENDATION_REQUESTS}\n",
        major = profile.major,
        interests = profile.interests,
        aptitude = profile.aptitude,
    )
}

#[cfg(test)]
mod tests {
    use super::build_recommendation_prompt;
    use crate::UserProfile;

    fn sample_profile() -> UserProfile {
        UserProfile::new(
            "Early Childhood Education",
            "AI, educational technology",
            "educational consultant",
        )
    }

    #[test]
    fn prompt_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(
            build_recommendation_prompt(&profile),
            build_recommendation_prompt(&profile.clone())
        );
    }

    #[test]
    fn prompt_contains_profile_fields_verbatim() {
        let prompt = build_recommendation_prompt(&sample_profile());
        assert!(prompt.contains("- Current major: Early Childhood Education\n"));
        assert!(prompt.contains("- Interests: AI, educational technology\n"));
        assert!(prompt.contains("- Aptitude / career goals: educational consultant\n"));
    }

    #[test]
    fn prompt_requests_two_modules_one_dual_major_and_one_minor() {
        let prompt = build_recommendation_prompt(&sample_profile());
        assert!(prompt.starts_with("You are an academic advisor"));
        assert!(prompt.contains("Two Micro-Degree (MD) recommendations"));
        assert!(prompt.contains("9-15 credit-units"));
        assert!(prompt.contains("One dual-major recommendation (about 36 credit-units)"));
        assert!(prompt.contains("One minor recommendation (about 24 credit-units)"));

        let modules = prompt.find("Two Micro-Degree").expect("module section");
        let dual = prompt.find("dual-major").expect("dual major section");
        let minor = prompt.find("One minor").expect("minor section");
        assert!(modules < dual && dual < minor);
    }

    #[test]
    fn regression_placeholder_like_input_is_not_reinterpreted() {
        let profile = UserProfile::new("{major}", "{aptitude} <b>& \"quotes\"", "  spaced  ");
        let prompt = build_recommendation_prompt(&profile);

        assert!(prompt.contains("- Current major: {major}\n"));
        assert!(prompt.contains("- Interests: {aptitude} <b>& \"quotes\"\n"));
        assert!(prompt.contains("- Aptitude / career goals:   spaced  \n"));
    }

    #[test]
    fn empty_fields_render_empty_placeholders() {
        let prompt = build_recommendation_prompt(&UserProfile::new("", "", ""));
        assert!(prompt.contains("- Current major: \n"));
        assert!(prompt.contains("- Interests: \n"));
    }

    #[test]
    fn different_profiles_produce_different_prompts() {
        let other = UserProfile::new("Business", "marketing", "founder");
        assert_ne!(
            build_recommendation_prompt(&sample_profile()),
            build_recommendation_prompt(&other)
        );
    }
}
