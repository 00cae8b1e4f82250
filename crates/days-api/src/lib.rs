//! JSON REST API for the Days journal.
//!
//! Exposes an axum [`Router`] backed by any [`days_core::store::EntryStore`].
//! Transport concerns and static assets are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", days_api::api_router(store.clone()))
//! ```

pub mod entries;
pub mod error;
pub mod months;

use std::sync::Arc;

use axum::{Router, routing::get};
use days_core::store::EntryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EntryStore + 'static,
{
  Router::new()
    .route(
      "/entries/{date}",
      get(entries::get_one::<S>)
        .post(entries::save::<S>)
        .delete(entries::delete_one::<S>),
    )
    .route("/entries/month/{year}/{month}", get(months::dates::<S>))
    .route("/entries/month/{year}/{month}/summary", get(months::summaries::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
