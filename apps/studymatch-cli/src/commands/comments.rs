//! Shared board: comment CLI commands

use super::confirm;
use crate::api::ApiClient;
use crate::error::CliResult;
use crate::models::post::now_timestamp;
use crate::models::{NewComment, PostOrComment};
use crate::output::print_success;
use clap::{Args, Subcommand};

/// Comment commands
#[derive(Args, Debug)]
pub struct CommentsArgs {
    #[command(subcommand)]
    pub command: CommentsCommands,
}

#[derive(Subcommand, Debug)]
pub enum CommentsCommands {
    /// List the comments under a post
    List(ListArgs),
    /// Comment on a post
    Add(AddArgs),
    /// Delete a comment
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Post ID
    pub post_id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Post ID
    pub post_id: i64,

    /// Comment text
    pub text: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Comment ID
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute comment commands
pub async fn execute(args: CommentsArgs) -> CliResult<()> {
    match args.command {
        CommentsCommands::List(a) => execute_list(a).await,
        CommentsCommands::Add(a) => execute_add(a).await,
        CommentsCommands::Delete(a) => execute_delete(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let comments = client.list_comments(args.post_id).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comments)?);
    } else if comments.is_empty() {
        println!("No comments yet.");
    } else {
        for comment in &comments {
            println!("[{}] {}  ({})", comment.id, comment.description, comment.timestamp);
        }
    }

    Ok(())
}

async fn execute_add(args: AddArgs) -> CliResult<()> {
    let request = NewComment::new(&args.text, now_timestamp())?;
    let client = ApiClient::from_defaults()?;

    match client.add_comment(args.post_id, &request).await? {
        PostOrComment::Comment(comment) => {
            print_success(&format!("Comment {} added", comment.id));
        }
        PostOrComment::Post(post) => print_success(&format!(
            "Comment added to '{}' ({} comments)",
            post.post_name,
            post.comments.len()
        )),
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    if !confirm(format!("Delete comment {}?", args.id), args.force)? {
        return Ok(());
    }

    let client = ApiClient::from_defaults()?;
    client.delete_comment(args.id).await?;
    print_success(&format!("Comment {} deleted", args.id));

    Ok(())
}
