use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::version::comparator::Policy;

/// Default log level when neither the config nor RUST_LOG sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Comparison policy used when the command line does not pick one
    pub policy: Policy,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// EnvFilter directive, e.g. "debug" or "version_cmp=trace"
    pub level: String,
    /// Write logs to `log_path()` instead of stderr
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults; unreadable or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/version-cmp if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-cmp,
/// or ./version-cmp if neither is available.
pub fn config_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
    .join("config.json")
}

/// Returns the path to the log file.
/// Uses $XDG_DATA_HOME/version-cmp if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-cmp.
pub fn log_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
    .join("version-cmp.log")
}

fn app_dir_with_env(
    xdg_dir: Option<String>,
    home_dir: Option<PathBuf>,
    home_fallback: &str,
) -> PathBuf {
    let base_dir = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_fallback)))
        .unwrap_or_else(|| PathBuf::from("."));

    base_dir.join("version-cmp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "policy": "golang"
        }))
        .unwrap();

        assert_eq!(result.policy, Policy::Golang);
        assert_eq!(result.log, LogConfig::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "policy": "generic",
            "log": {
                "level": "debug",
                "file": true
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                policy: Policy::Generic,
                log: LogConfig {
                    level: "debug".to_string(),
                    file: true,
                }
            }
        );
    }

    #[test]
    fn config_rejects_unknown_policy() {
        let result = serde_json::from_value::<Config>(json!({ "policy": "npm" }));
        assert!(result.is_err());
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "policy": "golang" }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.policy, Policy::Golang);
    }

    #[test]
    fn load_reports_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn load_reports_unreadable_path() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a file
        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn app_dir_with_env_uses_xdg_dir_when_set() {
        let path = app_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
            ".config",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/version-cmp"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_home() {
        let path = app_dir_with_env(None, Some(PathBuf::from("/home/user")), ".local/share");

        assert_eq!(path, PathBuf::from("/home/user/.local/share/version-cmp"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = app_dir_with_env(None, None, ".config");
        assert_eq!(path, PathBuf::from("./version-cmp"));
    }
}
