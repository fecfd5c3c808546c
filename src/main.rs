//! Supatask - Supabase todo, project, and note client
//!
//! Main entry point for the supatask CLI.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use supatask::cli::{Cli, Commands, NoteCommand, ProjectCommand, TodoCommand};
use supatask::commands;
use supatask::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load and validate configuration; an unset URL or anon key is
    // surfaced here rather than as a confusing request failure later.
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path)?;
    config.validate()?;

    let email = cli.email.as_deref();
    let password = cli.password.as_deref();

    // Execute command
    match cli.command {
        Commands::Register => {
            let (email, password) = commands::require_credentials(email, password)?;
            commands::auth::register(&config, email, password).await
        }
        Commands::Login => {
            let (email, password) = commands::require_credentials(email, password)?;
            commands::auth::login(&config, email, password).await
        }
        Commands::Todos { command } => match command {
            TodoCommand::List { project } => {
                commands::todos::list(&config, email, password, project).await
            }
            TodoCommand::Add { title, project } => {
                commands::todos::add(&config, email, password, &title, project).await
            }
            TodoCommand::Toggle { id, done } => {
                commands::todos::toggle(&config, email, password, id, done).await
            }
            TodoCommand::Rm { id } => commands::todos::rm(&config, email, password, id).await,
        },
        Commands::Projects { command } => match command {
            ProjectCommand::List => commands::projects::list(&config, email, password).await,
            ProjectCommand::Add { name } => {
                commands::projects::add(&config, email, password, &name).await
            }
            ProjectCommand::Rm { id } => commands::projects::rm(&config, email, password, id).await,
        },
        Commands::Notes { command } => match command {
            NoteCommand::List { project } => {
                commands::notes::list(&config, email, password, project).await
            }
            NoteCommand::Add {
                title,
                body,
                project,
            } => commands::notes::add(&config, email, password, &title, &body, project).await,
            NoteCommand::Rm { id } => commands::notes::rm(&config, email, password, id).await,
        },
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects debug-level
/// output for this crate.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "supatask=debug"
    } else {
        "supatask=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
