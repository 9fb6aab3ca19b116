//! Forget the signed-in user

use crate::config::ConfigPaths;
use crate::error::CliResult;
use crate::models::Session;
use crate::output::{print_info, print_success};
use clap::Args;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

/// Execute the logout command
pub async fn execute(_args: LogoutArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;

    match Session::load(&paths)? {
        Some(session) => {
            Session::delete(&paths)?;
            print_success(&format!("Signed out {}", session.user.netid));
        }
        None => print_info("Not signed in."),
    }

    Ok(())
}
