//! Group management CLI commands

use super::confirm;
use crate::api::{ApiClient, ApiError};
use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use crate::models::{require_non_empty, Group, JoinStatus, NewGroup, Session, User};
use crate::output::{print_header, print_info, print_key_value, print_success, truncate};
use clap::{Args, Subcommand};
use tracing::info;

/// Group management commands
#[derive(Args, Debug)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommands,
}

#[derive(Subcommand, Debug)]
pub enum GroupsCommands {
    /// List all groups
    List(ListArgs),
    /// Show a group's members and tasks
    Get(GetArgs),
    /// Create a new group
    Create(CreateArgs),
    /// Delete a group
    Delete(DeleteArgs),
    /// Join a group as the signed-in user
    Join(JoinArgs),
    /// Leave the signed-in user's group
    Leave,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Group ID
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Group name
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Group ID
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Group ID
    pub id: i64,
}

/// Execute group commands
pub async fn execute(args: GroupsArgs) -> CliResult<()> {
    match args.command {
        GroupsCommands::List(a) => execute_list(a).await,
        GroupsCommands::Get(a) => execute_get(a).await,
        GroupsCommands::Create(a) => execute_create(a).await,
        GroupsCommands::Delete(a) => execute_delete(a).await,
        GroupsCommands::Join(a) => execute_join(a).await,
        GroupsCommands::Leave => execute_leave().await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let groups = client.list_groups().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else if groups.is_empty() {
        println!("No groups found.");
    } else {
        print_group_table(&groups);
    }

    Ok(())
}

async fn execute_get(args: GetArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let client = ApiClient::from_defaults()?;
    let group = client.get_group(args.id).await.map_err(|e| not_found(e, args.id))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
        return Ok(());
    }

    let status = Session::load(&paths)?.map(|s| JoinStatus::of(&s.user, &group));
    print_group_details(&group, status);

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let request = NewGroup {
        name: require_non_empty("Group name", &args.name)?,
    };
    let client = ApiClient::from_defaults()?;

    let group = client.create_group(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else {
        print_success(&format!("Group created: {} (ID {})", group.name, group.id));
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let group = client.get_group(args.id).await.map_err(|e| not_found(e, args.id))?;

    if !confirm(
        format!(
            "Delete group '{}' and its {} tasks?",
            group.name,
            group.tasks.len()
        ),
        args.force,
    )? {
        return Ok(());
    }

    client.delete_group(args.id).await?;
    print_success(&format!("Group deleted: {}", group.name));

    Ok(())
}

async fn execute_join(args: JoinArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let mut session = Session::require(&paths)?;
    let client = ApiClient::from_defaults()?;

    let (user, group) = join_group(&client, session.user.id, args.id).await?;
    session.set_user(user);
    session.save(&paths)?;

    print_success(&format!("Joined '{}'", group.name));
    println!();
    print_group_details(&group, Some(JoinStatus::of(&session.user, &group)));

    Ok(())
}

async fn execute_leave() -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let mut session = Session::require(&paths)?;
    let client = ApiClient::from_defaults()?;

    let (user, left) = leave_group(&client, session.user.id).await?;
    session.set_user(user);
    session.save(&paths)?;

    print_success(&format!("Left group {left}"));

    Ok(())
}

/// Put a user into a group
///
/// Membership is decided on fresh copies of both sides; a student belongs
/// to at most one group. Returns the refreshed user and group.
pub async fn join_group(client: &ApiClient, user_id: i64, group_id: i64) -> CliResult<(User, Group)> {
    let (user, group) = tokio::join!(client.get_user(user_id), client.get_group(group_id));
    let user = user.map_err(|e| account_gone(e, user_id))?;
    let group = group.map_err(|e| not_found(e, group_id))?;

    match JoinStatus::of(&user, &group) {
        JoinStatus::Available => {}
        JoinStatus::Joined => {
            return Err(CliError::NotAllowed(format!(
                "you are already in '{}'",
                group.name
            )))
        }
        JoinStatus::InDifferentGroup(other) => {
            return Err(CliError::NotAllowed(format!(
                "you are already in group {other}; leave it first"
            )))
        }
    }

    client.assign_group(user.id, Some(group.id)).await?;
    info!(user = user.id, group = group.id, "joined group");

    let (user, group) =
        tokio::try_join!(client.get_user(user.id), client.get_group(group.id))?;
    Ok((user, group))
}

/// Take a user out of their group
///
/// Returns the refreshed user and the id of the group they left.
pub async fn leave_group(client: &ApiClient, user_id: i64) -> CliResult<(User, i64)> {
    let user = client
        .get_user(user_id)
        .await
        .map_err(|e| account_gone(e, user_id))?;
    let group_id = user
        .group_id
        .ok_or_else(|| CliError::NotAllowed("you are not in a group".to_string()))?;

    client.assign_group(user.id, None).await?;
    info!(user = user.id, group = group_id, "left group");

    let user = client.get_user(user.id).await?;
    if user.group_id.is_some() {
        return Err(CliError::NotAllowed(format!(
            "the server kept you in group {group_id}"
        )));
    }
    Ok((user, group_id))
}

/// The signed-in user vanished from the server
fn account_gone(e: ApiError, id: i64) -> CliError {
    match e {
        ApiError::Http(404) => CliError::NotFound(format!(
            "your account (user {id}) no longer exists. Run 'studymatch login' to sign in again."
        )),
        other => other.into(),
    }
}

fn not_found(e: ApiError, id: i64) -> CliError {
    match e {
        ApiError::Http(404) => CliError::NotFound(format!("Group not found: {id}")),
        other => other.into(),
    }
}

fn print_group_table(groups: &[Group]) {
    println!("{:<6} {:<30} {:<8} {:<6}", "ID", "NAME", "MEMBERS", "TASKS");
    println!("{}", "-".repeat(54));

    for group in groups {
        println!(
            "{:<6} {:<30} {:<8} {:<6}",
            group.id,
            truncate(&group.name, 28),
            group.users.len(),
            group.tasks.len()
        );
    }
}

pub(crate) fn print_group_details(group: &Group, status: Option<JoinStatus>) {
    print_header(&format!("Group: {}", group.name));
    print_key_value("ID", &group.id.to_string());
    if let Some(status) = status {
        print_key_value("You", status.label());
    }

    println!();
    if group.users.is_empty() {
        print_info("No members yet.");
    } else {
        println!("Members:");
        for user in &group.users {
            println!("  - {} ({})", user.name, user.netid);
        }
    }

    println!();
    if group.tasks.is_empty() {
        print_info("No tasks yet.");
    } else {
        println!("{:<6} {:<24} {:<12} {}", "ID", "TASK", "DUE", "DESCRIPTION");
        for task in &group.tasks {
            println!(
                "{:<6} {:<24} {:<12} {}",
                task.id,
                truncate(&task.task_name, 22),
                truncate(&task.due_date, 10),
                truncate(&task.description, 40)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_group_names_the_group() {
        match not_found(ApiError::Http(404), 2) {
            CliError::NotFound(msg) => assert_eq!(msg, "Group not found: 2"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_user_asks_to_sign_in_again() {
        match account_gone(ApiError::Http(404), 4) {
            CliError::NotFound(msg) => {
                assert!(msg.contains("user 4"));
                assert!(msg.contains("studymatch login"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_other_failures_pass_through() {
        assert!(matches!(
            account_gone(ApiError::Http(500), 4),
            CliError::Api(ApiError::Http(500))
        ));
        assert!(matches!(
            not_found(ApiError::MissingData, 2),
            CliError::Api(ApiError::MissingData)
        ));
    }
}
