//! User management CLI commands

use super::confirm;
use crate::api::{ApiClient, ApiError};
use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use crate::models::{format_rating, require_non_empty, NewUser, Session, User, UserOrGroup};
use crate::output::{or_na, print_header, print_key_value, print_success, truncate};
use clap::{Args, Subcommand};

/// User management commands
#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// List all users
    List(ListArgs),
    /// Get details of a specific user
    Get(GetArgs),
    /// Create a new user
    Create(CreateArgs),
    /// Move a user into a group
    Assign(AssignArgs),
    /// Delete a user
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User ID
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// University NetID
    #[arg(long)]
    pub netid: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// User ID
    pub id: i64,

    /// Group ID to place the user in
    #[arg(long)]
    pub group: i64,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User ID
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute user commands
pub async fn execute(args: UsersArgs) -> CliResult<()> {
    match args.command {
        UsersCommands::List(a) => execute_list(a).await,
        UsersCommands::Get(a) => execute_get(a).await,
        UsersCommands::Create(a) => execute_create(a).await,
        UsersCommands::Assign(a) => execute_assign(a).await,
        UsersCommands::Delete(a) => execute_delete(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let users = client.list_users().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&users)?);
    } else if users.is_empty() {
        println!("No users found.");
    } else {
        print_user_table(&users);
        println!("\n{} users", users.len());
    }

    Ok(())
}

async fn execute_get(args: GetArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let user = client.get_user(args.id).await.map_err(|e| not_found(e, args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    // The group lookup is best effort; its absence reads as N/A
    let group_name = match user.group_id {
        Some(group_id) => client.get_group(group_id).await.ok().map(|g| g.name),
        None => None,
    };
    print_user_details(&user, group_name.as_deref());

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let request = NewUser {
        name: require_non_empty("Name", &args.name)?,
        netid: require_non_empty("NetID", &args.netid)?,
    };
    let client = ApiClient::from_defaults()?;

    let user = client.create_user(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        print_success("User created successfully!");
        println!();
        print_user_details(&user, None);
    }

    Ok(())
}

async fn execute_assign(args: AssignArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;

    let answer = client.assign_group(args.id, Some(args.group)).await?;
    match answer {
        UserOrGroup::Group(group) => print_success(&format!(
            "User {} is now in '{}' ({} members)",
            args.id,
            group.name,
            group.users.len()
        )),
        UserOrGroup::User(user) => print_success(&format!(
            "{} is now in group {}",
            user.name,
            user.group_id.map_or("-".to_string(), |g| g.to_string())
        )),
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let client = ApiClient::from_defaults()?;

    let user = client.get_user(args.id).await.map_err(|e| not_found(e, args.id))?;

    if !confirm(
        format!("Delete user '{}' ({})?", user.name, user.netid),
        args.force,
    )? {
        return Ok(());
    }

    client.delete_user(args.id).await?;
    print_success(&format!("User deleted: {}", user.netid));

    // Deleting your own account signs you out
    if let Some(session) = Session::load(&paths)? {
        if session.user.id == args.id {
            Session::delete(&paths)?;
            println!("Signed out.");
        }
    }

    Ok(())
}

fn not_found(e: ApiError, id: i64) -> CliError {
    match e {
        ApiError::Http(404) => CliError::NotFound(format!("User not found: {id}")),
        other => other.into(),
    }
}

fn print_user_table(users: &[User]) {
    println!(
        "{:<6} {:<28} {:<12} {:<8} {:<6}",
        "ID", "NAME", "NETID", "GROUP", "RATING"
    );
    println!("{}", "-".repeat(64));

    for user in users {
        println!(
            "{:<6} {:<28} {:<12} {:<8} {:<6}",
            user.id,
            truncate(&user.name, 26),
            truncate(&user.netid, 10),
            or_na(user.group_id),
            format_rating(&user.rates)
        );
    }
}

fn print_user_details(user: &User, group_name: Option<&str>) {
    print_header(&format!("User: {}", user.name));
    print_key_value("ID", &user.id.to_string());
    print_key_value("NetID", &user.netid);
    print_key_value("Group", &or_na(group_name));
    print_key_value("Rating", &format_rating(&user.rates));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_404_only() {
        assert!(matches!(
            not_found(ApiError::Http(404), 3),
            CliError::NotFound(_)
        ));
        assert!(matches!(
            not_found(ApiError::Http(500), 3),
            CliError::Api(ApiError::Http(500))
        ));
    }
}
