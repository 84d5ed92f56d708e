use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::GraphResult;

pub const DB_PATH_ENV: &str = "MBTI_GRAPH_DB";
pub const LOG_ENV: &str = "MBTI_GRAPH_LOG";
pub const DEFAULT_DATA_DIR: &str = ".data";
pub const DEFAULT_DB_FILE: &str = "mbti-graph.db";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    /// Resolves settings from the command line, then the environment, then
    /// built-in defaults.
    pub fn resolve(cli_db_path: Option<PathBuf>) -> Self {
        Self::from_sources(
            cli_db_path,
            std::env::var(DB_PATH_ENV).ok(),
            std::env::var(LOG_ENV).ok(),
            std::env::var("RUST_LOG").ok(),
        )
    }

    pub fn from_sources(
        cli_db_path: Option<PathBuf>,
        env_db_path: Option<String>,
        env_log: Option<String>,
        rust_log: Option<String>,
    ) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let db_path = cli_db_path
            .or_else(|| non_empty(env_db_path).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DB_FILE));

        let log_filter = non_empty(env_log)
            .or_else(|| non_empty(rust_log))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self { db_path, log_filter }
    }

    /// Creates the parent directory of the database file if needed.
    pub fn ensure_data_dir(&self) -> GraphResult<()> {
        if let Some(dir) = self.db_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
            }
        }
        Ok(())
    }
}

/// Installs the stderr log subscriber. An unparsable filter falls back to
/// the default level.
pub fn init_logging(filter: &str) {
    let env_filter =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
