//! Wire models for the StudyMatch API

pub mod group;
pub mod listing;
pub mod post;
pub mod rate;
pub mod session;
pub mod task;
pub mod user;

pub use group::{group_names, groups_of, Group, JoinStatus, NewGroup};
pub use listing::Listing;
pub use post::{Comment, NewComment, NewPost, Post, PostOrComment};
pub use rate::{average_rating, format_rating, Rate, Stars};
pub use session::Session;
pub use task::{Task, TaskPayload};
pub use user::{GroupAssignment, NewUser, User, UserOrGroup};

use crate::error::{CliError, CliResult};

/// Trim a user-entered field and reject it when nothing is left
pub fn require_non_empty(field: &str, value: &str) -> CliResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CliError::Validation(format!("{field} cannot be empty.")))
    } else {
        Ok(trimmed.to_string())
    }
}
