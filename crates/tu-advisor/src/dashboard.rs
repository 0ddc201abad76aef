//! Static dashboard and learning-history data for the signed-in student.

use serde::Serialize;

pub const STUDENT_NAME: &str = "Han Sang-jun";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl ComponentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentStatus::Completed => "completed",
            ComponentStatus::InProgress => "in progress",
            ComponentStatus::NotStarted => "not started",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleComponent {
    pub name: &'static str,
    pub status: ComponentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A module the student is partway through.
pub struct ModuleProgress {
    pub name: &'static str,
    pub components: &'static [ModuleComponent],
}

impl ModuleProgress {
    pub fn completed_components(&self) -> usize {
        self.components
            .iter()
            .filter(|component| component.status == ComponentStatus::Completed)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedModule {
    pub name: &'static str,
    pub department: &'static str,
    pub term: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedModule {
    pub title: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditSummary {
    pub earned: u32,
    pub required: u32,
    pub major: u32,
    pub general_education: u32,
    pub other: u32,
}

impl CreditSummary {
    pub fn completion_ratio(&self) -> f64 {
        if self.required == 0 {
            return 0.0;
        }
        f64::from(self.earned) / f64::from(self.required)
    }

    pub fn completion_percent(&self) -> u32 {
        (self.completion_ratio() * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "grade", rename_all = "snake_case")]
pub enum CourseOutcome {
    Grade(&'static str),
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub title: &'static str,
    pub outcome: CourseOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub term: &'static str,
    pub courses: &'static [CourseRecord],
}

const fn component(name: &'static str, status: ComponentStatus) -> ModuleComponent {
    ModuleComponent { name, status }
}

const MODULE_PROGRESS: &[ModuleProgress] = &[
    ModuleProgress {
        name: "Big Data Business MD",
        components: &[
            component("Data Analysis", ComponentStatus::Completed),
            component("Data Visualization", ComponentStatus::InProgress),
            component("Business", ComponentStatus::NotStarted),
        ],
    },
    ModuleProgress {
        name: "AI-SW MD",
        components: &[
            component("Programming", ComponentStatus::Completed),
            component("Computing", ComponentStatus::InProgress),
            component("Fundamentals", ComponentStatus::NotStarted),
        ],
    },
    ModuleProgress {
        name: "Digital Marketing MD",
        components: &[
            component("Marketing", ComponentStatus::Completed),
            component("Digital", ComponentStatus::Completed),
            component("Strategy", ComponentStatus::InProgress),
        ],
    },
];

const COMPLETED_MODULES: &[CompletedModule] = &[
    CompletedModule {
        name: "AI-SW MD",
        department: "Computer Science",
        term: "2024-2",
    },
    CompletedModule {
        name: "Programming Fundamentals",
        department: "Computer Science",
        term: "2024-1",
    },
    CompletedModule {
        name: "Introduction to Data Analysis",
        department: "Business Administration",
        term: "2024-2",
    },
];

const SUGGESTED_MODULES: &[SuggestedModule] = &[
    SuggestedModule {
        title: "AI Consulting Convergence",
        summary: "Build consulting skills that apply AI technology to business problems",
    },
    SuggestedModule {
        title: "Data-Driven Marketing",
        summary: "Use data analysis to shape digital marketing strategy",
    },
    SuggestedModule {
        title: "Smart Factory Operations",
        summary: "Apply AI and IoT technology to manufacturing process management",
    },
];

const CREDITS: CreditSummary = CreditSummary {
    earned: 102,
    required: 120,
    major: 57,
    general_education: 33,
    other: 12,
};

const LEARNING_HISTORY: &[TermRecord] = &[
    TermRecord {
        term: "2024 Fall",
        courses: &[
            CourseRecord {
                title: "Data Visualization",
                outcome: CourseOutcome::InProgress,
            },
            CourseRecord {
                title: "Computational Thinking",
                outcome: CourseOutcome::InProgress,
            },
            CourseRecord {
                title: "Digital Marketing Strategy",
                outcome: CourseOutcome::InProgress,
            },
        ],
    },
    TermRecord {
        term: "2024 Spring",
        courses: &[
            CourseRecord {
                title: "Introduction to Data Analysis",
                outcome: CourseOutcome::Grade("A+"),
            },
            CourseRecord {
                title: "Programming Fundamentals",
                outcome: CourseOutcome::Grade("A"),
            },
            CourseRecord {
                title: "Management Information Systems",
                outcome: CourseOutcome::Grade("B+"),
            },
        ],
    },
];

pub fn module_progress() -> &'static [ModuleProgress] {
    MODULE_PROGRESS
}

pub fn completed_modules() -> &'static [CompletedModule] {
    COMPLETED_MODULES
}

pub fn suggested_modules() -> &'static [SuggestedModule] {
    SUGGESTED_MODULES
}

pub fn credit_summary() -> CreditSummary {
    CREDITS
}

/// Terms ordered newest first.
pub fn learning_history() -> &'static [TermRecord] {
    LEARNING_HISTORY
}

#[cfg(test)]
mod tests {
    use super::{
        credit_summary, learning_history, module_progress, CourseOutcome, CreditSummary,
    };

    #[test]
    fn credit_summary_breakdown_adds_up() {
        let credits = credit_summary();
        assert_eq!(
            credits.major + credits.general_education + credits.other,
            credits.earned
        );
        assert!((credits.completion_ratio() - 0.85).abs() < 1e-9);
        assert_eq!(credits.completion_percent(), 85);
    }

    #[test]
    fn zero_requirement_reports_zero_progress() {
        let credits = CreditSummary {
            earned: 10,
            required: 0,
            major: 10,
            general_education: 0,
            other: 0,
        };
        assert_eq!(credits.completion_percent(), 0);
    }

    #[test]
    fn progress_counts_completed_components() {
        let counts = module_progress()
            .iter()
            .map(|module| module.completed_components())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![1, 1, 2]);
    }

    #[test]
    fn newest_term_is_still_in_progress() {
        let history = learning_history();
        assert_eq!(history[0].term, "2024 Fall");
        assert!(history[0]
            .courses
            .iter()
            .all(|course| course.outcome == CourseOutcome::InProgress));
        assert_eq!(history[1].courses[0].outcome, CourseOutcome::Grade("A+"));
    }
}
