//! Sign in with a NetID, creating the account on first use

use crate::api::{ApiClient, SignIn};
use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use crate::models::{require_non_empty, Session};
use crate::output::print_success;
use clap::Args;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Your university NetID
    #[arg(long)]
    pub netid: String,

    /// Full name; creates the account when the NetID is unknown
    #[arg(long)]
    pub name: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the login command
pub async fn execute(args: LoginArgs) -> CliResult<()> {
    let netid = require_non_empty("NetID", &args.netid)?;
    let name = args
        .name
        .as_deref()
        .map(|n| require_non_empty("Name", n))
        .transpose()?;

    let paths = ConfigPaths::new()?;
    let client = ApiClient::from_defaults()?;

    let (user, created) = match client.sign_in(&netid, name.as_deref()).await? {
        SignIn::Found(user) => (user, false),
        SignIn::Created(user) => (user, true),
        SignIn::Unknown => {
            return Err(CliError::NotFound(format!(
                "No user with NetID '{netid}'. Pass --name to create an account."
            )))
        }
    };

    let session = Session::new(user);
    session.save(&paths)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.user)?);
    } else if created {
        print_success(&format!(
            "Created account for {} ({})",
            session.user.name, session.user.netid
        ));
    } else {
        print_success(&format!(
            "Signed in as {} ({})",
            session.user.name, session.user.netid
        ));
    }

    Ok(())
}
