//! Dashboard: users, groups, and board posts in one view

use crate::api::ApiClient;
use crate::config::ConfigPaths;
use crate::error::CliResult;
use crate::models::{group_names, groups_of, Group, Post, Session, User};
use crate::output::{print_header, print_key_value, print_warning, truncate};
use clap::Args;
use serde::Serialize;
use tracing::warn;

#[derive(Args, Debug)]
pub struct HomeArgs {
    /// Number of recent posts to show
    #[arg(long, default_value = "5")]
    pub posts: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the dashboard managed to load
///
/// Each section is fetched independently; a failed fetch leaves it empty.
#[derive(Debug, Default, Serialize)]
pub struct Dashboard {
    pub users: Vec<User>,
    pub groups: Vec<Group>,
    pub posts: Vec<Post>,
    pub current_user: Option<User>,
}

impl Dashboard {
    /// Issue the three fetches concurrently and keep whatever succeeds
    pub async fn load(client: &ApiClient, netid: Option<&str>) -> Self {
        let (users, groups, posts) =
            tokio::join!(client.list_users(), client.list_groups(), client.list_posts());

        let mut dashboard = Dashboard::default();
        match users {
            Ok(users) => dashboard.users = users,
            Err(e) => warn!(error = %e, "failed to load users"),
        }
        match groups {
            Ok(groups) => dashboard.groups = groups,
            Err(e) => warn!(error = %e, "failed to load groups"),
        }
        match posts {
            Ok(posts) => dashboard.posts = posts,
            Err(e) => warn!(error = %e, "failed to load posts"),
        }

        if let Some(netid) = netid {
            dashboard.current_user = dashboard.users.iter().find(|u| u.netid == netid).cloned();
        }
        dashboard
    }
}

/// Execute the home command
pub async fn execute(args: HomeArgs) -> CliResult<()> {
    let paths = ConfigPaths::new()?;
    let client = ApiClient::from_defaults()?;
    let mut session = Session::load(&paths)?;

    let netid = session.as_ref().map(|s| s.user.netid.clone());
    let dashboard = Dashboard::load(&client, netid.as_deref()).await;

    if let (Some(session), Some(user)) = (session.as_mut(), dashboard.current_user.as_ref()) {
        session.set_user(user.clone());
        session.save(&paths)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    print_header("StudyMatch");
    match (&session, &dashboard.current_user) {
        (_, Some(user)) => {
            print_key_value("Signed in", &format!("{} ({})", user.name, user.netid));
            print_key_value("Groups", &group_names(&groups_of(user, &dashboard.groups)));
        }
        (Some(session), None) => {
            print_key_value("Signed in", &format!("{} (cached)", session.user.netid));
        }
        (None, None) => print_key_value("Signed in", "no"),
    }
    print_key_value("Students", &dashboard.users.len().to_string());
    print_key_value("Groups", &dashboard.groups.len().to_string());
    println!();

    if dashboard.posts.is_empty() {
        print_warning("No posts to show.");
        return Ok(());
    }

    println!("{:<6} {:<30} {:<20} {:<8}", "ID", "TITLE", "POSTED", "COMMENTS");
    println!("{}", "-".repeat(67));
    for post in dashboard.posts.iter().take(args.posts) {
        println!(
            "{:<6} {:<30} {:<20} {:<8}",
            post.id,
            truncate(&post.post_name, 28),
            truncate(&post.timestamp, 18),
            post.comments.len()
        );
    }

    Ok(())
}
