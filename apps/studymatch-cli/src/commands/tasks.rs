//! Group task CLI commands

use super::confirm;
use super::groups::print_group_details;
use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::TaskPayload;
use crate::output::print_success;
use clap::{Args, Subcommand};

/// Task commands
#[derive(Args, Debug)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TasksCommands,
}

#[derive(Subcommand, Debug)]
pub enum TasksCommands {
    /// Add a task to a group
    Add(AddArgs),
    /// Edit a task
    Update(UpdateArgs),
    /// Delete a task
    Delete(DeleteArgs),
}

/// Fields every task carries; all are required
#[derive(Args, Debug)]
pub struct TaskFields {
    /// Task name
    #[arg(long)]
    pub name: String,

    /// What needs doing
    #[arg(long)]
    pub description: String,

    /// Due date, e.g. 2024-12-09
    #[arg(long)]
    pub due: String,
}

impl TaskFields {
    fn payload(&self) -> CliResult<TaskPayload> {
        TaskPayload::new(&self.name, &self.description, &self.due)
    }
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Group ID
    pub group_id: i64,

    #[command(flatten)]
    pub fields: TaskFields,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Task ID
    pub id: i64,

    #[command(flatten)]
    pub fields: TaskFields,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Task ID
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute task commands
pub async fn execute(args: TasksArgs) -> CliResult<()> {
    match args.command {
        TasksCommands::Add(a) => execute_add(a).await,
        TasksCommands::Update(a) => execute_update(a).await,
        TasksCommands::Delete(a) => execute_delete(a).await,
    }
}

async fn execute_add(args: AddArgs) -> CliResult<()> {
    let payload = args.fields.payload()?;
    let client = ApiClient::from_defaults()?;

    let group = client.add_task(args.group_id, &payload).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else {
        print_success(&format!("Task '{}' added", payload.task_name));
        println!();
        print_group_details(&group, None);
    }

    Ok(())
}

async fn execute_update(args: UpdateArgs) -> CliResult<()> {
    let payload = args.fields.payload()?;
    let client = ApiClient::from_defaults()?;

    let group = client.update_task(args.id, &payload).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else {
        print_success(&format!("Task {} updated", args.id));
        println!();
        print_group_details(&group, None);
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    if !confirm(format!("Delete task {}?", args.id), args.force)? {
        return Ok(());
    }

    let client = ApiClient::from_defaults()?;
    client.delete_task(args.id).await?;
    print_success(&format!("Task {} deleted", args.id));

    Ok(())
}
