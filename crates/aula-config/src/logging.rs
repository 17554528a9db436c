use std::env;
use std::path::PathBuf;

/// Logging settings.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: level for the `aula` crates when `RUST_LOG` is unset
///   (default: `info`)
/// - `LOG_DIR`: when set, structured JSON logs are also written to a
///   daily-rolling file in this directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}
