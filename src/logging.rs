use std::fs;

use aula_config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter for the workspace crates.
///
/// `RUST_LOG` wins when set; otherwise the Aula crates log at `level` and
/// HTTP internals are held at warn.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "aula={level},aula_client={level},reqwest=warn,hyper=warn,hyper_util=warn"
        ))
    })
}

/// Initialize console logging and, when `LOG_DIR` is configured, a daily
/// rolling JSON log file.
///
/// # Configuration
///
/// - **Log Level**: `RUST_LOG`, else `LOG_LEVEL` (default: "info")
/// - **Format**: compact console output; JSON lines in `<LOG_DIR>/aula.json`
pub fn init_logging(config: &LoggingConfig) {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(false)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(&config.level));

    let json_layer = config.log_dir.as_ref().and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!(
                "⚠️  Could not create log directory {}: {}. Continuing with console logging only",
                dir.display(),
                e
            );
            return None;
        }

        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "aula.json");
        Some(
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(env_filter(&config.level)),
        )
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();
}
