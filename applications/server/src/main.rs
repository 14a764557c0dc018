/// Gigbook server - venue, artist, and show listings
use clap::{Parser, Subcommand};
use gigbook_server::{config::ServerConfig, router, state::AppState};
use gigbook_storage::SqliteListings;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gigbook-server")]
#[command(about = "Gigbook venue, artist, and show listings server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigbook_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::Migrate => {
            migrate().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Gigbook server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = gigbook_storage::create_pool(&config.storage.database_url).await?;
    gigbook_storage::run_migrations(&pool).await?;
    let db = Arc::new(SqliteListings::new(pool));
    tracing::info!("Database connected");

    // Build application state and router
    let state = AppState::new(db);
    let app = router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = gigbook_storage::create_pool(&config.storage.database_url).await?;
    gigbook_storage::run_migrations(&pool).await?;
    tracing::info!("Migrations applied");

    Ok(())
}
