/// Roster Server - user management web application
use clap::{Parser, Subcommand};
use roster_server::{cli, config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./roster.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address (must be unique)
        #[arg(short, long)]
        email: String,
    },
    /// List all users, newest first
    ListUsers,
    /// Delete a user by id
    DeleteUser {
        /// User id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser { name, email } => {
            add_user(&config, &name, &email).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
        Commands::DeleteUser { id } => {
            delete_user(&config, id).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // An unreachable database aborts startup
    let app_state = AppState::connect(&config.storage).await?;

    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, name: &str, email: &str) -> anyhow::Result<()> {
    let app_state = AppState::connect(&config.storage).await?;
    cli::add_user(&app_state.users, name, email, &mut std::io::stdout()).await?;
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let app_state = AppState::connect(&config.storage).await?;
    cli::list_users(&app_state.users, &mut std::io::stdout()).await
}

async fn delete_user(config: &ServerConfig, id: i64) -> anyhow::Result<()> {
    let app_state = AppState::connect(&config.storage).await?;
    cli::delete_user(&app_state.users, id, &mut std::io::stdout()).await?;
    Ok(())
}
