//! recipebox - recipe browsing and submission web app
//!
//! Serves the browse/submit/search screens on localhost, backed by a
//! SQLite document store in the resolved root folder (or an in-memory
//! store with `--in-memory`).

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use recipebox::{build_router, AppState};
use recipebox_common::config::{
    default_config_path, CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig,
};
use recipebox_common::db::init_database;
use recipebox_common::store::{InMemoryDocumentStore, SqliteDocumentStore};
use recipebox_common::DocumentStore;

#[derive(Parser, Debug)]
#[command(name = "recipebox", version, about = "Recipe box web app")]
struct Args {
    /// Folder holding recipebox.db (overrides RECIPEBOX_ROOT_FOLDER and config file)
    #[arg(long, value_name = "PATH")]
    root_folder: Option<PathBuf>,

    /// HTTP port
    #[arg(long, env = "RECIPEBOX_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    bind: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep recipes in memory only; nothing is written to disk
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(default_config_path);
    let toml_config = TomlConfig::load_or_default(config_path.as_deref());
    let defaults = CompiledDefaults::for_current_platform();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&toml_config.logging.level)),
        )
        .init();

    // Build identification first, before any database work
    info!(
        "Starting RecipeBox (recipebox) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &config_path {
        info!("Config file: {}", path.display());
    }

    let store: Arc<dyn DocumentStore> = if args.in_memory {
        info!("Using in-memory document store (recipes are not persisted)");
        Arc::new(InMemoryDocumentStore::new())
    } else {
        let root_folder = RootFolderResolver::new("recipebox")
            .with_cli_arg(args.root_folder.clone())
            .with_toml_config(toml_config.clone())
            .resolve();

        let initializer = RootFolderInitializer::new(root_folder);
        initializer.ensure_directory_exists()?;

        let db_path = initializer.database_path();
        info!("Database path: {}", db_path.display());

        let pool = init_database(&db_path)
            .await
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;
        info!("✓ Connected to database");
        Arc::new(SqliteDocumentStore::new(pool))
    };

    let port = args.port.or(toml_config.port).unwrap_or(defaults.port);
    let bind = args.bind.or(toml_config.bind).unwrap_or(defaults.bind);
    let addr = format!("{}:{}", bind, port);

    let app = build_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("recipebox listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
