//! CLI command implementations, one module per screen of the app

pub mod comments;
pub mod groups;
pub mod home;
pub mod login;
pub mod logout;
pub mod people;
pub mod posts;
pub mod tasks;
pub mod users;
pub mod whoami;

use crate::error::{CliError, CliResult};
use dialoguer::Confirm;

/// Ask before a destructive call; `force` skips the prompt
///
/// Refuses outright when stdin is not a terminal and `force` is unset.
pub(crate) fn confirm(prompt: String, force: bool) -> CliResult<bool> {
    if force {
        return Ok(true);
    }

    if !atty::is(atty::Stream::Stdin) {
        return Err(CliError::Validation(
            "Cannot confirm deletion in non-interactive mode. Use --force to skip confirmation."
                .to_string(),
        ));
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}
