//! StudyMatch CLI library
//!
//! Typed REST client, wire models, and session handling for the StudyMatch
//! study-group service, plus the command implementations behind the
//! `studymatch` binary.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use api::{ApiClient, ApiError, ApiResult};
pub use error::{CliError, CliResult};
