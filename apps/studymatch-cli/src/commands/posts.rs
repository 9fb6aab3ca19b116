//! Shared board: post CLI commands

use super::confirm;
use crate::api::{ApiClient, ApiError};
use crate::error::{CliError, CliResult};
use crate::models::post::now_timestamp;
use crate::models::{NewPost, Post};
use crate::output::{print_header, print_info, print_success, truncate};
use clap::{Args, Subcommand};

/// Post commands
#[derive(Args, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PostsCommands {
    /// List board posts
    List(ListArgs),
    /// Show a post and its comments
    Get(GetArgs),
    /// Publish a post
    Create(CreateArgs),
    /// Delete a post
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
    /// Post ID
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Post title
    #[arg(long)]
    pub title: String,

    /// Post body
    #[arg(long)]
    pub description: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Post ID
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Execute post commands
pub async fn execute(args: PostsArgs) -> CliResult<()> {
    match args.command {
        PostsCommands::List(a) => execute_list(a).await,
        PostsCommands::Get(a) => execute_get(a).await,
        PostsCommands::Create(a) => execute_create(a).await,
        PostsCommands::Delete(a) => execute_delete(a).await,
    }
}

async fn execute_list(args: ListArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let posts = client.list_posts().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else if posts.is_empty() {
        println!("No posts yet.");
    } else {
        println!(
            "{:<6} {:<30} {:<20} {:<8}",
            "ID", "TITLE", "POSTED", "COMMENTS"
        );
        println!("{}", "-".repeat(67));
        for post in &posts {
            println!(
                "{:<6} {:<30} {:<20} {:<8}",
                post.id,
                truncate(&post.post_name, 28),
                truncate(&post.timestamp, 18),
                post.comments.len()
            );
        }
    }

    Ok(())
}

async fn execute_get(args: GetArgs) -> CliResult<()> {
    let client = ApiClient::from_defaults()?;
    let post = client.get_post(args.id).await.map_err(|e| match e {
        ApiError::Http(404) => CliError::NotFound(format!("Post not found: {}", args.id)),
        other => other.into(),
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print_post_details(&post);
    }

    Ok(())
}

async fn execute_create(args: CreateArgs) -> CliResult<()> {
    let request = NewPost::new(&args.title, &args.description, now_timestamp())?;
    let client = ApiClient::from_defaults()?;

    let post = client.create_post(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print_success(&format!("Posted '{}' (ID {})", post.post_name, post.id));
    }

    Ok(())
}

async fn execute_delete(args: DeleteArgs) -> CliResult<()> {
    if !confirm(format!("Delete post {}?", args.id), args.force)? {
        return Ok(());
    }

    let client = ApiClient::from_defaults()?;
    client.delete_post(args.id).await?;
    print_success(&format!("Post {} deleted", args.id));

    Ok(())
}

fn print_post_details(post: &Post) {
    print_header(&post.post_name);
    println!("{}", post.description);
    println!("Posted {}", post.timestamp);
    println!();

    if post.comments.is_empty() {
        print_info("No comments yet.");
        return;
    }

    for comment in &post.comments {
        println!("  [{}] {}  ({})", comment.id, comment.description, comment.timestamp);
    }
}
