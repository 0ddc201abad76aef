//! Plain-text rendering of advisor views.

use tu_advisor::{
    completed_modules, credit_summary, learning_history, module_progress, suggested_modules,
    CatalogModule, ComponentStatus, CourseOutcome, ModuleCart, ModuleDraft, RecommendationError,
    RecommendationRecord, UserProfile, View, STUDENT_NAME,
};

const API_KEY_SETUP_HELP: &str = "How to configure the Gemini API key:
  Option 1 (local development): create a .env file in the working directory containing
    GEMINI_API_KEY=your_actual_api_key_here
  Option 2: export GEMINI_API_KEY in your shell, or pass --gemini-api-key
  Keys are free at https://aistudio.google.com/app/apikey";

pub(crate) fn render_header() -> String {
    format!(
        "Hello, {STUDENT_NAME}!\nKeep building your own learning journey, one step at a time."
    )
}

pub(crate) fn render_footer(today: &str) -> String {
    format!("(c) 2024 TU Learning Design AI Assistant | last updated: {today}")
}

fn component_marker(status: ComponentStatus) -> &'static str {
    match status {
        ComponentStatus::Completed => "[x]",
        ComponentStatus::InProgress => "[~]",
        ComponentStatus::NotStarted => "[ ]",
    }
}

pub(crate) fn render_dashboard() -> String {
    let mut lines = vec![format!("== {} ==", View::Dashboard.title())];

    let progress = module_progress();
    lines.push(format!("Modules in progress ({}):", progress.len()));
    for module in progress {
        let components = module
            .components
            .iter()
            .map(|component| {
                format!(
                    "{} {} ({})",
                    component_marker(component.status),
                    component.name,
                    component.status.label()
                )
            })
            .collect::<Vec<_>>()
            .join(" | ");
        lines.push(format!("  {}: {components}", module.name));
    }

    let completed = completed_modules();
    lines.push(format!("Completed modules ({}):", completed.len()));
    for module in completed {
        lines.push(format!(
            "  - {} ({} / completed {})",
            module.name, module.department, module.term
        ));
    }

    let suggested = suggested_modules();
    lines.push(format!("Suggested modules ({}):", suggested.len()));
    for module in suggested {
        lines.push(format!("  * {}: {}", module.title, module.summary));
    }

    let credits = credit_summary();
    lines.push(format!(
        "Total credits: {} / {} ({}%)",
        credits.earned,
        credits.required,
        credits.completion_percent()
    ));
    lines.push(format!(
        "  major {} | general education {} | other {}",
        credits.major, credits.general_education, credits.other
    ));
    lines.join("\n")
}

pub(crate) fn render_history() -> String {
    let mut lines = vec![format!("== {} ==", View::LearningHistory.title())];
    for term in learning_history() {
        lines.push(format!("{}:", term.term));
        for course in term.courses {
            let outcome = match course.outcome {
                CourseOutcome::Grade(grade) => grade,
                CourseOutcome::InProgress => "in progress",
            };
            lines.push(format!("  - {} ({outcome})", course.title));
        }
    }
    lines.join("\n")
}

pub(crate) fn render_modules(modules: &[&CatalogModule]) -> String {
    let mut lines = vec![format!("== {} ==", View::ModuleExplorer.title())];
    if modules.is_empty() {
        lines.push("no modules match the search".to_string());
    }
    for module in modules {
        lines.push(format!(
            "- {} | {} | {} credits",
            module.name,
            module.department_label(),
            module.credits
        ));
    }
    lines.join("\n")
}

pub(crate) fn render_cart(cart: &ModuleCart) -> String {
    let mut lines = vec![format!("== {} ==", View::ModuleCart.title())];
    if cart.is_empty() {
        lines.push("Add modules you are interested in and plan your studies.".to_string());
        return lines.join("\n");
    }
    for module in cart.modules() {
        lines.push(format!("- {} ({} credits)", module.name, module.credits));
    }
    lines.push(format!("total: {} credits", cart.total_credits()));
    lines.join("\n")
}

pub(crate) fn render_design_saved(draft: &ModuleDraft) -> String {
    format!(
        "module '{}' saved with subjects: {}",
        draft.name,
        draft.subjects.join(", ")
    )
}

pub(crate) fn render_profile(profile: &UserProfile) -> String {
    format!(
        "major: {}\ninterests: {}\naptitude: {}",
        profile.major, profile.interests, profile.aptitude
    )
}

/// Intro shown when entering the recommendation view.
pub(crate) fn render_recommendation_view(configured: bool) -> String {
    let mut lines = vec![format!("== {} ==", View::AiRecommendation.title())];
    if !configured {
        lines.push(
            "warning: the Gemini API key is not configured. Set it to use AI recommendations."
                .to_string(),
        );
        lines.push(API_KEY_SETUP_HELP.to_string());
    }
    lines.join("\n")
}

pub(crate) fn render_record(record: &RecommendationRecord) -> String {
    format!(
        "AI recommendation complete ({})\n--- Personalized learning path ---\n{}",
        record.timestamp, record.result
    )
}

pub(crate) fn render_recommendation_log(records: &[RecommendationRecord]) -> String {
    if records.is_empty() {
        return "no recommendations archived in this session".to_string();
    }
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            format!(
                "#{} [{}] {} / {} / {}\n{}",
                index + 1,
                record.timestamp,
                record.profile.major,
                record.profile.interests,
                record.profile.aptitude,
                record.result
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) fn render_recommendation_error(error: &RecommendationError) -> String {
    let mut rendered = format!("error: {error}");
    if let Some(hint) = error.hint() {
        rendered.push_str(&format!("\nhint: {hint}"));
    }
    if *error == RecommendationError::Unconfigured {
        rendered.push('\n');
        rendered.push_str(API_KEY_SETUP_HELP);
    }
    rendered
}
