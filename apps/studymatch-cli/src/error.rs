//! CLI error types and exit codes

use crate::api::ApiError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: No signed-in user
/// - 3: Network error
/// - 4: Validation error, not found, other 4xx
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Not signed in. Run 'studymatch login --netid <NETID>' first.")]
    NotAuthenticated,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Action not allowed: {0}")]
    NotAllowed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotAuthenticated => 2,
            CliError::Api(api) => match api.status() {
                Some(status) if status >= 500 => 5,
                Some(_) => 4,
                None if api.is_transport() => 3,
                None => 1,
            },
            CliError::Validation(_) | CliError::NotFound(_) | CliError::NotAllowed(_) => 4,
            CliError::Config(_) | CliError::Io(_) | CliError::InputError(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::NotAuthenticated => {
                Some("Sign in with your NetID, adding --name to create a new account.")
            }
            CliError::Api(ApiError::RequestFailed(_)) => {
                Some("Check your network connection and the STUDYMATCH_API_URL setting.")
            }
            CliError::Api(ApiError::BadUrl(_)) => {
                Some("Check api_url in config.json or STUDYMATCH_API_URL.")
            }
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::InputError(format!("Dialog error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_not_authenticated() {
        assert_eq!(CliError::NotAuthenticated.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_request_failed() {
        let err = CliError::from(ApiError::RequestFailed("refused".to_string()));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_http_5xx() {
        assert_eq!(CliError::Api(ApiError::Http(502)).exit_code(), 5);
    }

    #[test]
    fn test_exit_code_http_4xx() {
        assert_eq!(CliError::Api(ApiError::Http(404)).exit_code(), 4);
    }

    #[test]
    fn test_exit_code_decoding() {
        assert_eq!(
            CliError::Api(ApiError::Decoding("missing field".to_string())).exit_code(),
            1
        );
    }

    #[test]
    fn test_exit_code_bad_url_and_missing_data() {
        assert_eq!(CliError::Api(ApiError::BadUrl("x".to_string())).exit_code(), 1);
        assert_eq!(CliError::Api(ApiError::MissingData).exit_code(), 1);
    }

    #[test]
    fn test_exit_code_validation() {
        assert_eq!(CliError::Validation("x".to_string()).exit_code(), 4);
        assert_eq!(CliError::NotAllowed("x".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_api_error_display_is_transparent() {
        let err = CliError::from(ApiError::Http(418));
        assert_eq!(err.to_string(), "HTTP Error: 418.");
    }

    #[test]
    fn test_error_display_not_authenticated() {
        assert!(CliError::NotAuthenticated.to_string().contains("Not signed in"));
    }
}
