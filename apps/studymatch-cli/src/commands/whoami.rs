//! Show the signed-in user's profile

use crate::api::ApiClient;
use crate::config::ConfigPaths;
use crate::error::CliResult;
use crate::models::{format_rating, group_names, groups_of, Session};
use crate::output::{print_header, print_key_value};
use clap::Args;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the whoami command
///
/// Refreshes the stored user from the server before printing.
pub async fn execute(args: WhoamiArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let mut session = Session::require(&paths)?;
    let client = ApiClient::from_defaults()?;

    let (user, groups) = tokio::try_join!(
        client.get_user(session.user.id),
        client.list_groups()
    )?;
    session.set_user(user);
    session.save(&paths)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.user)?);
        return Ok(());
    }

    let user = &session.user;
    print_header(&user.name);
    print_key_value("ID", &user.id.to_string());
    print_key_value("NetID", &user.netid);
    print_key_value("Groups", &group_names(&groups_of(user, &groups)));
    print_key_value("Rating", &format_rating(&user.rates));
    print_key_value(
        "Since",
        &session
            .signed_in_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    );

    Ok(())
}
