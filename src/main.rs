use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use moodmeet::{AppState, config::Config, router};
use moodmeet_event::{
    icebreaker::{FallbackIcebreaker, IcebreakerGenerator, OpenAiIcebreaker},
    serpapi::SerpApi,
};
use sqlx::migrate::MigrateDatabase;

/// moodmeet - Mood-based event discovery
#[derive(Parser)]
#[command(name = "moodmeet")]
#[command(about = "Discover events that match your mood", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Fetch events from SerpApi and merge them into the database
    ImportEvents {
        /// Search location (overrides config file)
        #[arg(long)]
        location: Option<String>,

        /// Maximum number of events to import (overrides config file)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    moodmeet::observability::init_observability(
        "moodmeet",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::ImportEvents { location, limit } => {
            import_events_command(config, location, limit).await
        }
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting moodmeet server...");

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let pool =
        moodmeet::db::create_pool(&config.database.url, config.database.max_connections).await?;
    moodmeet_db::migrate(&pool).await?;

    moodmeet_event::Command(pool.clone()).seed_samples().await?;

    let icebreaker: Arc<dyn IcebreakerGenerator> = if config.icebreaker.openai_api_key.is_empty()
    {
        tracing::info!("OPENAI_API_KEY not set, using fallback icebreakers");
        Arc::new(FallbackIcebreaker)
    } else {
        Arc::new(OpenAiIcebreaker::new(
            config.icebreaker.openai_api_key,
            config.icebreaker.model,
        )?)
    };

    let app = router(AppState::new(pool, icebreaker, config.uploads.dir));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = moodmeet::db::create_pool(&config.database.url, 1).await?;
    moodmeet_db::migrate(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn import_events_command(
    config: Config,
    location_override: Option<String>,
    limit_override: Option<usize>,
) -> Result<()> {
    if config.serpapi.api_key.is_empty() {
        tracing::warn!("SERPAPI_API_KEY not set, skipping event import");
        return Ok(());
    }

    let location = location_override.unwrap_or(config.serpapi.location);
    let limit = limit_override.unwrap_or(config.serpapi.num_events);

    let events = SerpApi::new(config.serpapi.api_key)?
        .fetch(&location, limit)
        .await?;

    let pool =
        moodmeet::db::create_pool(&config.database.url, config.database.max_connections).await?;
    moodmeet_db::migrate(&pool).await?;

    let report = moodmeet_event::Command(pool).import(events).await?;

    tracing::info!(
        added = report.added,
        updated = report.updated,
        total = report.total,
        %location,
        "Event import completed"
    );

    Ok(())
}
