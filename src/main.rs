//! route-directory
//!
//! Serves an Axum application whose routes are discovered from a directory.
//!
//! # Architecture Overview
//!
//! ```text
//!   routes/                        ┌──────────────────────────────────────────┐
//!   ├── index.toml ──┐             │              ROUTE DIRECTORY             │
//!   ├── users/       │             │                                          │
//!   │   ├── index.toml ──────────▶ │  discovery::scanner   (walk, filter)     │
//!   │   └── profile.json ┘         │          │                               │
//!   └── .draft.toml  (hidden)      │          ▼                               │
//!                                  │  discovery::mount_path (path → /url)     │
//!                                  │          │                               │
//!                                  │          ▼                               │
//!                                  │  routes::manifest → routes::registry     │
//!                                  │     (provider lookup + inject::Container)│
//!                                  │          │                               │
//!                                  │          ▼                               │
//!                                  │  RouteModule::Router ──▶ http::server    │
//!                                  │  RouteModule::Invalid ─▶ error log       │
//!                                  └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use route_directory::config::{load_config, validation::validate_config, AppConfig, ConfigError};
use route_directory::discovery::discover;
use route_directory::inject::Container;
use route_directory::lifecycle::{shutdown_on_signal, Shutdown};
use route_directory::observability::{logging::init_logging, metrics::init_metrics};
use route_directory::providers::{AppInfo, APP_INFO};
use route_directory::{HttpServer, ProviderRegistry, RouteDirectory};

#[derive(Parser)]
#[command(name = "route-directory", version)]
#[command(about = "Serve route files mounted by directory convention", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route directory, overrides `routes.work_dir`.
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Bind address, overrides `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every route file and serve them (default)
    Serve,
    /// Print the mount table without loading route files
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(routes) = &cli.routes {
        config.routes.work_dir = routes.clone();
    }
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.observability)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::List { json } => list(&config, json).await,
    }
}

async fn list(config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let routes = discover(&config.routes).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    let width = routes
        .iter()
        .map(|r| r.mount_path.as_str().len())
        .max()
        .unwrap_or(0);
    for route in &routes {
        println!("{:<width$}  {}", route.mount_path, route.source.display());
    }
    Ok(())
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        work_dir = %config.routes.work_dir.display(),
        "route-directory v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    if config.observability.metrics_enabled {
        init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let mut container = Container::new();
    container.provide(APP_INFO, AppInfo::current());
    let registry = ProviderRegistry::with_builtin();

    let plugin = RouteDirectory::new(config.routes.clone());
    let mut server = HttpServer::new(config.timeouts.clone());
    let outcome = plugin.load(&container, &registry, &mut server).await?;
    tracing::info!(
        mounted = outcome.mounted(),
        invalid = outcome.invalid,
        "Routes mounted"
    );
    plugin.start().await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = Arc::clone(&shutdown);
    tokio::spawn(async move {
        shutdown_on_signal(&signal_shutdown).await;
    });

    server.run(listener, server_shutdown).await?;
    plugin.stop().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
