//! StudyMatch CLI - study groups, tasks, and the shared board from the terminal
//!
//! This CLI enables students to:
//! - Sign in with their NetID
//! - Browse, create, and join study groups
//! - Manage group tasks
//! - Post and comment on the shared board

use clap::{Parser, Subcommand};
use studymatch_cli::commands;
use studymatch_cli::error::CliResult;
use studymatch_cli::logging::{self, LogLevel};

/// StudyMatch CLI - find your study group
#[derive(Parser)]
#[command(name = "studymatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Show progress messages
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show HTTP method, URL, status and timing for each request
    #[arg(long, global = true)]
    debug: bool,

    /// Show raw request and response bodies
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with your NetID
    Login(commands::login::LoginArgs),

    /// Sign out
    Logout(commands::logout::LogoutArgs),

    /// Show your profile
    Whoami(commands::whoami::WhoamiArgs),

    /// Overview of students, groups and recent posts
    Home(commands::home::HomeArgs),

    /// Manage users
    Users(commands::users::UsersArgs),

    /// Everyone, by group, with ratings
    People(commands::people::PeopleArgs),

    /// Manage study groups
    Groups(commands::groups::GroupsArgs),

    /// Manage group tasks
    Tasks(commands::tasks::TasksArgs),

    /// Read and write board posts
    Posts(commands::posts::PostsArgs),

    /// Read and write comments on posts
    Comments(commands::comments::CommentsArgs),
}

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(LogLevel::from_flags(cli.verbose, cli.debug, cli.trace));

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Login(args) => commands::login::execute(args).await,
        Commands::Logout(args) => commands::logout::execute(args).await,
        Commands::Whoami(args) => commands::whoami::execute(args).await,
        Commands::Home(args) => commands::home::execute(args).await,
        Commands::Users(args) => commands::users::execute(args).await,
        Commands::People(args) => commands::people::execute(args).await,
        Commands::Groups(args) => commands::groups::execute(args).await,
        Commands::Tasks(args) => commands::tasks::execute(args).await,
        Commands::Posts(args) => commands::posts::execute(args).await,
        Commands::Comments(args) => commands::comments::execute(args).await,
    }
}
