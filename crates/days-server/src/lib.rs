//! HTTP wiring for the Days journal server.
//!
//! Mounts the JSON API from `days-api` under `/api`, optionally serves a
//! static frontend for every other path, and traces each request.

pub mod settings;

pub use settings::{Overrides, ServerConfig};

use std::{io, path::Path, sync::Arc};

use axum::Router;
use days_core::store::EntryStore;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the application [`Router`]: API under `/api`, static assets from
/// `config.static_dir` (if set) as the fallback.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: EntryStore + 'static,
{
  let app = Router::new().nest("/api", days_api::api_router(store));

  let app = match &config.static_dir {
    Some(dir) => app.fallback_service(ServeDir::new(dir)),
    None => app,
  };

  app.layer(TraceLayer::new_for_http())
}

/// Create the directory that will hold the database file, if needed.
pub fn prepare_store_dir(store_path: &Path) -> io::Result<()> {
  match store_path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
    _ => Ok(()),
  }
}

// ─── Integration tests ────────────────────────────────────────────────────────
