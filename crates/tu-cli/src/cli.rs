use clap::{Args, Parser, Subcommand};
use tu_advisor::{AdvisorConfig, DEFAULT_MAJOR};

#[derive(Debug, Parser)]
#[command(
    name = "tu-advisor",
    about = "TU learning-design assistant: browse modules, track credits, and get AI curriculum recommendations",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        help = "API key for Google Gemini. Leave unset to run without AI recommendations"
    )]
    pub(crate) gemini_api_key: Option<String>,

    #[arg(
        long,
        env = "TU_MODEL",
        default_value = "gemini-2.0-flash-exp",
        help = "Gemini model used for recommendations"
    )]
    pub(crate) model: String,

    #[arg(
        long,
        env = "TU_GOOGLE_API_BASE",
        default_value = "https://generativelanguage.googleapis.com/v1beta",
        help = "Base URL for Google Gemini API"
    )]
    pub(crate) google_api_base: String,

    #[arg(
        long,
        env = "TU_REQUEST_TIMEOUT_MS",
        default_value_t = 120_000,
        help = "HTTP timeout for the recommendation request in milliseconds"
    )]
    pub(crate) request_timeout_ms: u64,

    #[command(subcommand)]
    pub(crate) command: Option<CliCommand>,
}

impl Cli {
    pub(crate) fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.model.clone(),
            api_base: self.google_api_base.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum CliCommand {
    /// Show module progress and credit totals.
    Dashboard,
    /// Show courses taken per term.
    History,
    /// Browse the module catalog.
    Modules {
        #[arg(long, short, help = "Filter by module name or department")]
        search: Option<String>,
    },
    /// Put catalog modules into the planning cart.
    Cart {
        #[arg(long = "add", value_name = "MODULE")]
        add: Vec<String>,
    },
    /// Design a custom convergence module.
    Design {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "subject", value_name = "SUBJECT")]
        subjects: Vec<String>,
    },
    /// Request AI learning-path recommendations for a profile.
    Recommend(RecommendArgs),
    /// Run an interactive session over stdin.
    Session,
}

#[derive(Debug, Args)]
pub(crate) struct RecommendArgs {
    #[arg(long, default_value = DEFAULT_MAJOR)]
    pub(crate) major: String,
    #[arg(long, default_value = "")]
    pub(crate) interests: String,
    #[arg(long, default_value = "")]
    pub(crate) aptitude: String,
    #[arg(long, help = "Print the archived record as JSON")]
    pub(crate) json: bool,
}
