//! Session model for the signed-in student

use super::User;
use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current user, persisted between invocations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Last known server copy of the signed-in user
    pub user: User,

    /// When the user signed in on this machine
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            signed_in_at: Utc::now(),
        }
    }

    /// Load session from file
    pub fn load(paths: &ConfigPaths) -> CliResult<Option<Self>> {
        if !paths.session_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&paths.session_file)?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    /// Load the session or fail when nobody is signed in
    pub fn require(paths: &ConfigPaths) -> CliResult<Self> {
        Self::load(paths)?.ok_or(CliError::NotAuthenticated)
    }

    /// Save session to file
    pub fn save(&self, paths: &ConfigPaths) -> CliResult<()> {
        paths.ensure_dir_exists()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&paths.session_file, content)?;
        Ok(())
    }

    /// Delete session file
    pub fn delete(paths: &ConfigPaths) -> CliResult<()> {
        if paths.session_file.exists() {
            std::fs::remove_file(&paths.session_file)?;
        }
        Ok(())
    }

    /// Replace the stored user with a fresher copy, keeping the sign-in time
    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }
}
