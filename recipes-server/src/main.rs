//! recipes-server - HTTP service for the recipe catalog
//!
//! Serves the recipe CRUD API over a SQLite-backed store. The database
//! location resolves from CLI argument, environment, config file, or the
//! platform default, in that order.

use anyhow::Result;
use clap::Parser;
use recipes_common::config::resolve_database_path;
use recipes_common::db::{init_database, RecipeStore};
use recipes_server::{build_router, AppState};
use tracing::info;

/// Recipe catalog HTTP service
#[derive(Debug, Parser)]
#[command(name = "recipes-server", version, about)]
struct Args {
    /// Path to the SQLite database file
    #[arg(long)]
    database: Option<String>,

    /// Address to listen on
    #[arg(long, env = "RECIPES_BIND", default_value = "127.0.0.1:8000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting recipes-server v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let db_path = resolve_database_path(args.database.as_deref())?;
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;
    let store = RecipeStore::new(pool);

    let state = AppState::new(store);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("recipes-server listening on http://{}", args.bind);
    info!("Welcome page: http://{}/", args.bind);
    info!("Getting-started guide: http://{}/help", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
