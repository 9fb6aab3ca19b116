//! Configuration management for the StudyMatch CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;

/// Campus deployment of the StudyMatch server
pub const DEFAULT_API_URL: &str = "http://35.221.42.253";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
