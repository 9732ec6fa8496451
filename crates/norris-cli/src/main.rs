use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "norris")]
#[command(about = "norris - Chuck Norris facts, served without repeats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random fact, avoiding repeats within your session
    Random,
    /// List all facts
    List,
    /// Show one fact by id
    Show { id: u64 },
    /// Add a new fact (requires login)
    Add { text: String },
    /// Create a user account
    Register { username: String },
    /// Log the current session in
    Login { username: String },
    /// Log the current session out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Issue an API bearer token
    Token { username: String },
    /// Token-authenticated API operations
    Api {
        #[command(subcommand)]
        action: ApiAction,
    },
}

#[derive(Subcommand)]
enum ApiAction {
    /// List all facts
    List {
        #[arg(long)]
        token: String,
    },
    /// Retrieve one fact
    Show {
        #[arg(long)]
        token: String,
        id: u64,
    },
    /// Create a fact owned by the token's user
    Add {
        #[arg(long)]
        token: String,
        text: String,
    },
    /// Replace a fact's text
    Update {
        #[arg(long)]
        token: String,
        id: u64,
        text: String,
    },
    /// Delete a fact
    Delete {
        #[arg(long)]
        token: String,
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let context = AppContext::build().await?;

    match cli.command {
        Commands::Random => commands::facts::random(&context).await?,
        Commands::List => commands::facts::list(&context).await?,
        Commands::Show { id } => commands::facts::show(&context, id).await?,
        Commands::Add { text } => commands::facts::add(&context, text).await?,
        Commands::Register { username } => commands::auth::register(&context, username).await?,
        Commands::Login { username } => commands::auth::login(&context, username).await?,
        Commands::Logout => commands::auth::logout(&context).await?,
        Commands::Whoami => commands::auth::whoami(&context).await?,
        Commands::Token { username } => commands::auth::token(&context, username).await?,
        Commands::Api { action } => match action {
            ApiAction::List { token } => commands::api::list(&context, token).await?,
            ApiAction::Show { token, id } => commands::api::show(&context, token, id).await?,
            ApiAction::Add { token, text } => commands::api::add(&context, token, text).await?,
            ApiAction::Update { token, id, text } => {
                commands::api::update(&context, token, id, text).await?
            }
            ApiAction::Delete { token, id } => {
                commands::api::delete(&context, token, id).await?
            }
        },
    }

    Ok(())
}
