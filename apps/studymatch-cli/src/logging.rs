//! Verbosity control for CLI diagnostics
//!
//! Levels are cumulative: Debug includes Verbose, Trace includes Debug.
//! Diagnostics go to stderr through `tracing`; `RUST_LOG` wins over flags.

use std::fmt;
use tracing_subscriber::EnvFilter;

/// Verbosity level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Warnings only (default)
    #[default]
    Normal = 0,
    /// Progress messages for each operation
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
    /// Raw request and response bodies
    Trace = 3,
}

impl LogLevel {
    /// Highest level named by the flags
    pub fn from_flags(verbose: bool, debug: bool, trace: bool) -> Self {
        if trace {
            Self::Trace
        } else if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Filter directive for this crate at this level
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Normal => "warn",
            Self::Verbose => "warn,studymatch_cli=info",
            Self::Debug => "warn,studymatch_cli=debug",
            Self::Trace => "warn,studymatch_cli=trace",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Install the global subscriber
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(level >= LogLevel::Debug)
        .try_init();
}
