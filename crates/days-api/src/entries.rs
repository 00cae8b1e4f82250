//! Handlers for `/entries/{date}`.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/entries/{date}` | 404 if nothing was saved for the date |
//! | `POST`   | `/entries/{date}` | Body: [`EntryBody`]; replaces the whole entry |
//! | `DELETE` | `/entries/{date}` | 204, also when there was no entry |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
};
use days_core::{
  date::EntryDate,
  entry::{Entry, Fields, NewEntry},
  store::EntryStore,
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── Get ──────────────────────────────────────────────────────────────────────

/// `GET /entries/{date}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(date): Path<String>,
) -> Result<Json<Entry>, ApiError>
where
  S: EntryStore,
{
  let date = EntryDate::parse(&date)?;
  let entry = store
    .get_entry(date)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("no entry for {date}")))?;
  Ok(Json(entry))
}

// ─── Save ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /entries/{date}`.
///
/// Clients usually echo back a full entry; its `date` and `timestamp` are
/// ignored. A `null` field value, or `"fields": null`, means unset.
#[derive(Debug, Default, Deserialize)]
pub struct EntryBody {
  #[serde(default)]
  pub fields: Option<BTreeMap<String, Option<String>>>,
}

impl EntryBody {
  /// Bind the body to the date taken from the request path.
  pub fn into_new_entry(self, date: EntryDate) -> NewEntry {
    let fields: Fields = self
      .fields
      .unwrap_or_default()
      .into_iter()
      .map(|(id, value)| (id, value.unwrap_or_default()))
      .collect();
    NewEntry::with_fields(date, fields)
  }
}

/// `POST /entries/{date}`: returns the stored entry with its new timestamp.
pub async fn save<S>(
  State(store): State<Arc<S>>,
  Path(date): Path<String>,
  body: Result<Json<EntryBody>, JsonRejection>,
) -> Result<Json<Entry>, ApiError>
where
  S: EntryStore,
{
  let date = EntryDate::parse(&date)?;
  let Json(body) = body?;

  let entry = store
    .save_entry(body.into_new_entry(date))
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(%date, timestamp = %entry.timestamp, "entry saved");
  Ok(Json(entry))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /entries/{date}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(date): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: EntryStore,
{
  let date = EntryDate::parse(&date)?;
  store.delete_entry(date).await.map_err(ApiError::store)?;
  tracing::debug!(%date, "entry deleted");
  Ok(StatusCode::NO_CONTENT)
}
