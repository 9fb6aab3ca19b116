//! User-editable settings stored in config.json

use super::{ConfigPaths, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};

/// CLI settings
///
/// Loaded from `config.json` when present, then overridden by
/// `STUDYMATCH_API_URL` and `STUDYMATCH_TIMEOUT_SECS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the StudyMatch server, without trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load settings from disk and apply environment overrides
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        let mut config = if paths.config_file.exists() {
            let content = std::fs::read_to_string(&paths.config_file)?;
            serde_json::from_str(&content).map_err(|e| {
                CliError::Config(format!(
                    "Invalid config file {}: {e}",
                    paths.config_file.display()
                ))
            })?
        } else {
            Config::default()
        };

        config.apply_env()?;
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    fn apply_env(&mut self) -> CliResult<()> {
        if let Ok(url) = std::env::var("STUDYMATCH_API_URL") {
            if !url.trim().is_empty() {
                self.api_url = url.trim().to_string();
            }
        }
        if let Ok(secs) = std::env::var("STUDYMATCH_TIMEOUT_SECS") {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "STUDYMATCH_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'"
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serializes tests that touch the override variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const URL_VAR: &str = "STUDYMATCH_API_URL";
    const TIMEOUT_VAR: &str = "STUDYMATCH_TIMEOUT_SECS";

    /// Run `f` with the override variables set as given, restoring them after
    fn with_env<R>(url: Option<&str>, timeout: Option<&str>, f: impl FnOnce() -> R) -> R {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved_url = std::env::var(URL_VAR).ok();
        let saved_timeout = std::env::var(TIMEOUT_VAR).ok();

        for (var, value) in [(URL_VAR, url), (TIMEOUT_VAR, timeout)] {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
        let result = f();

        for (var, value) in [(URL_VAR, saved_url), (TIMEOUT_VAR, saved_timeout)] {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
        result
    }

    fn paths_with_file(content: Option<&str>) -> (TempDir, ConfigPaths) {
        let tmp = TempDir::new().unwrap();
        let paths = ConfigPaths::in_dir(tmp.path());
        if let Some(content) = content {
            std::fs::write(&paths.config_file, content).unwrap();
        }
        (tmp, paths)
    }

    #[test]
    fn test_default_points_at_campus_server() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://35.221.42.253");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (_tmp, paths) = paths_with_file(None);

        let config = with_env(None, None, || Config::load(&paths)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let (_tmp, paths) = paths_with_file(Some(r#"{"timeout_secs": 5}"#));

        let config = with_env(None, None, || Config::load(&paths)).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_file_url_loses_trailing_slash() {
        let (_tmp, paths) = paths_with_file(Some(r#"{"api_url": "http://localhost:8000/"}"#));

        let config = with_env(None, None, || Config::load(&paths)).unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_env_overrides_file() {
        let (_tmp, paths) =
            paths_with_file(Some(r#"{"api_url": "http://file.example", "timeout_secs": 5}"#));

        let config = with_env(Some(" http://env.example/ "), Some("12"), || {
            Config::load(&paths)
        })
        .unwrap();
        assert_eq!(config.api_url, "http://env.example");
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_blank_env_url_is_ignored() {
        let (_tmp, paths) = paths_with_file(Some(r#"{"api_url": "http://file.example"}"#));

        let config = with_env(Some("   "), None, || Config::load(&paths)).unwrap();
        assert_eq!(config.api_url, "http://file.example");
    }

    #[test]
    fn test_non_numeric_timeout_is_config_error() {
        let (_tmp, paths) = paths_with_file(None);

        let result = with_env(None, Some("soon"), || Config::load(&paths));
        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains(TIMEOUT_VAR)),
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let (_tmp, paths) = paths_with_file(Some("not json"));

        let result = with_env(None, None, || Config::load(&paths));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
