//! Handlers for the month calendar views.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/entries/month/{year}/{month}` | JSON array of `YYYY-MM-DD` strings |
//! | `GET`  | `/entries/month/{year}/{month}/summary` | JSON array of `{date, working}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use days_core::{
  date::{EntryDate, YearMonth},
  entry::EntrySummary,
  store::EntryStore,
};

use crate::error::ApiError;

/// `GET /entries/month/{year}/{month}`
pub async fn dates<S>(
  State(store): State<Arc<S>>,
  Path((year, month)): Path<(String, String)>,
) -> Result<Json<Vec<EntryDate>>, ApiError>
where
  S: EntryStore,
{
  let month = YearMonth::parse(&year, &month)?;
  let dates = store
    .list_dates_by_month(month)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(dates))
}

/// `GET /entries/month/{year}/{month}/summary`
pub async fn summaries<S>(
  State(store): State<Arc<S>>,
  Path((year, month)): Path<(String, String)>,
) -> Result<Json<Vec<EntrySummary>>, ApiError>
where
  S: EntryStore,
{
  let month = YearMonth::parse(&year, &month)?;
  let summaries = store
    .list_summaries_by_month(month)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(summaries))
}
