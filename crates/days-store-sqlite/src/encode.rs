//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD`; timestamps as RFC 3339 UTC strings with
//! whole seconds and a `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};
use days_core::{
  date::EntryDate,
  entry::{Entry, EntrySummary},
};

use crate::{Error, Result};

// ─── EntryDate ───────────────────────────────────────────────────────────────

pub fn encode_date(date: EntryDate) -> String { date.to_string() }

pub fn decode_date(s: &str) -> Result<EntryDate> { Ok(EntryDate::parse(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read from one `details` row. `value` is `None` for SQL NULL.
pub struct RawField {
  pub field_id: String,
  pub value:    Option<String>,
}

/// Raw strings read from an `entries` header and its `details` rows.
pub struct RawEntry {
  pub timestamp: String,
  pub fields:    Vec<RawField>,
}

impl RawEntry {
  pub fn into_entry(self, date: EntryDate) -> Result<Entry> {
    let timestamp = decode_dt(&self.timestamp)?;
    let rows = self.fields.into_iter().map(|f| (f.field_id, f.value));
    Ok(Entry::from_stored(date, timestamp, rows))
  }
}

/// Raw strings read from the month summary join.
pub struct RawSummary {
  pub date:    String,
  pub working: String,
}

impl RawSummary {
  pub fn into_summary(self) -> Result<EntrySummary> {
    Ok(EntrySummary {
      date:    decode_date(&self.date)?,
      working: self.working,
    })
  }
}
