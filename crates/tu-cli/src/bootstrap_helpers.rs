use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Loads `.env.local` then `.env`; variables already set are never overridden.
pub(crate) fn load_dotenv_files() {
    for file in DOTENV_FILES {
        match dotenvy::from_filename(file) {
            Ok(path) => debug!(path = %path.display(), "loaded environment file"),
            Err(error) if error.not_found() => {}
            Err(error) => warn!(file, error = %error, "failed to load environment file"),
        }
    }
}
