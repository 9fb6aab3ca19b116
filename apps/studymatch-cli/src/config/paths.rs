//! Platform-specific configuration paths

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};

/// Configuration paths for the StudyMatch CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base configuration directory
    pub config_dir: PathBuf,
    /// Path to config.json
    pub config_file: PathBuf,
    /// Path to session.json (the signed-in user)
    pub session_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the current platform
    ///
    /// Paths:
    /// - Linux: ~/.config/studymatch/
    /// - macOS: ~/Library/Application Support/studymatch/
    /// - Windows: %APPDATA%\studymatch\
    pub fn new() -> CliResult<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self::in_dir(config_dir))
    }

    /// Build paths rooted at an explicit directory
    pub fn in_dir(config_dir: impl AsRef<Path>) -> Self {
        let config_dir = config_dir.as_ref().to_path_buf();
        Self {
            config_file: config_dir.join("config.json"),
            session_file: config_dir.join("session.json"),
            config_dir,
        }
    }

    /// Get the configuration directory, respecting STUDYMATCH_CONFIG_DIR
    fn get_config_dir() -> CliResult<PathBuf> {
        if let Ok(dir) = std::env::var("STUDYMATCH_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            CliError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(base_dir.join("studymatch"))
    }

    /// Ensure the configuration directory exists
    pub fn ensure_dir_exists(&self) -> CliResult<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_in_dir_layout() {
        let paths = ConfigPaths::in_dir("/tmp/studymatch-test");
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/studymatch-test"));
        assert!(paths.config_file.ends_with("config.json"));
        assert!(paths.session_file.ends_with("session.json"));
    }

    #[test]
    fn test_config_dir_env_override() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved = std::env::var("STUDYMATCH_CONFIG_DIR").ok();

        std::env::set_var("STUDYMATCH_CONFIG_DIR", "/tmp/studymatch-override");
        let paths = ConfigPaths::new().unwrap();
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/studymatch-override"));
        assert_eq!(
            paths.session_file,
            PathBuf::from("/tmp/studymatch-override/session.json")
        );

        std::env::remove_var("STUDYMATCH_CONFIG_DIR");
        if let Some(base) = dirs::config_dir() {
            assert_eq!(ConfigPaths::new().unwrap().config_dir, base.join("studymatch"));
        }

        if let Some(dir) = saved {
            std::env::set_var("STUDYMATCH_CONFIG_DIR", dir);
        }
    }

    #[test]
    fn test_ensure_dir_exists_creates_nested() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = ConfigPaths::in_dir(tmp.path().join("a").join("b"));
        paths.ensure_dir_exists().unwrap();
        assert!(paths.config_dir.is_dir());
    }
}
