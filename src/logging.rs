//! Tracing subscriber setup for the command line tool

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

/// Build the filter: RUST_LOG wins, then `--verbose`, then the configured level.
pub fn env_filter(config: &LogConfig, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// With `config.file` set, logs go to `log_file` as JSON and the returned
/// guard must be held until exit so buffered lines are flushed. Otherwise
/// logs go to stderr, leaving stdout for command output.
pub fn init(
    config: &LogConfig,
    verbose: bool,
    log_file: &Path,
) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(config, verbose);

    if config.file {
        let dir = log_file.parent().unwrap_or_else(|| Path::new("."));
        let prefix = log_file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("version-cmp.log");

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(prefix)
            .build(dir)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer).with_target(true))
            .try_init()?;

        return Ok(Some(guard));
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_prefers_verbose_over_config_level() {
        // RUST_LOG would take precedence over both
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LogConfig {
            level: "error".to_string(),
            file: false,
        };

        assert_eq!(
            env_filter(&config, true).to_string(),
            EnvFilter::new("debug").to_string()
        );
        assert_eq!(
            env_filter(&config, false).to_string(),
            EnvFilter::new("error").to_string()
        );
    }
}
