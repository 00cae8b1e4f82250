//! days server binary.
//!
//! Reads `days.toml` (or the path specified with `--config`), opens the
//! SQLite journal store, and serves the JSON API plus an optional static
//! frontend over HTTP.
//!
//! ```text
//! days --config /etc/days.toml
//! PORT=9000 DB_PATH=~/journal.db days --static-dir ./frontend/dist
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use days_server::{Overrides, ServerConfig, prepare_store_dir};
use days_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Days journal server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "days.toml")]
  config: PathBuf,

  /// Port to listen on.
  #[arg(long, env = "PORT")]
  port: Option<u16>,

  /// Path to the SQLite database file.
  #[arg(long, env = "DB_PATH")]
  db_path: Option<PathBuf>,

  /// Directory of frontend assets to serve outside `/api`.
  #[arg(long)]
  static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  tracing::info!(version = env!("CARGO_PKG_VERSION"), "Days journal starting");

  let overrides = Overrides {
    port:       cli.port,
    store_path: cli.db_path,
    static_dir: cli.static_dir,
  };
  let server_cfg = ServerConfig::load(&cli.config, &overrides)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  prepare_store_dir(&server_cfg.store_path).with_context(|| {
    format!("failed to create directory for {:?}", server_cfg.store_path)
  })?;

  let store = SqliteStore::open(&server_cfg.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.store_path))?;
  tracing::info!(path = ?server_cfg.store_path, "journal store opened");

  if let Some(dir) = &server_cfg.static_dir {
    tracing::info!(dir = ?dir, "serving static files");
  }

  let app = days_server::router(Arc::new(store), &server_cfg);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

/// Resolves on Ctrl-C. In-flight saves either commit or roll back on the
/// store thread regardless of when the request is dropped.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutdown requested");
}
