//! Journal entry types and the field catalog.
//!
//! An entry is stored as a header row (date, timestamp) plus one field row per
//! catalog [`FieldId`]. At the storage boundary a field value is an
//! `Option<String>` where `None` is a stored NULL; at the API boundary every
//! value is a plain `String` and NULL reads back as `""`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::EntryDate;

/// Field-ID → value map as seen by API callers.
pub type Fields = BTreeMap<String, String>;

// ─── Field catalog ───────────────────────────────────────────────────────────

/// A named attribute an entry may carry a value for.
///
/// The declaration order is the insertion order used on save. It has no other
/// meaning: field rows are always looked up by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
  PositionLon,
  PositionLat,
  PositionName,
  Rating,
  General,
  Working,
  Mood,
  MoodText,
  Lunch,
  Dinner,
  Tv,
  Sleep,
  SleepText,
}

impl FieldId {
  /// Every field ID, in catalog order.
  pub const ALL: [FieldId; 13] = [
    Self::PositionLon,
    Self::PositionLat,
    Self::PositionName,
    Self::Rating,
    Self::General,
    Self::Working,
    Self::Mood,
    Self::MoodText,
    Self::Lunch,
    Self::Dinner,
    Self::Tv,
    Self::Sleep,
    Self::SleepText,
  ];

  /// The identifier stored in the `field_id` column and used as the JSON key.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::PositionLon => "POSITION_LON",
      Self::PositionLat => "POSITION_LAT",
      Self::PositionName => "POSITION_NAME",
      Self::Rating => "RATING",
      Self::General => "GENERAL",
      Self::Working => "WORKING",
      Self::Mood => "MOOD",
      Self::MoodText => "MOOD_TXT",
      Self::Lunch => "LUNCH",
      Self::Dinner => "DINNER",
      Self::Tv => "TV",
      Self::Sleep => "SLEEP",
      Self::SleepText => "SLEEP_TXT",
    }
  }

  pub fn from_id(id: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|f| f.as_str() == id)
  }
}

impl std::fmt::Display for FieldId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Entry ───────────────────────────────────────────────────────────────────

/// A journal entry for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
  pub date:      EntryDate,
  /// Server-assigned time of the last save.
  pub timestamp: DateTime<Utc>,
  pub fields:    Fields,
}

impl Entry {
  /// Assemble an entry from its stored field rows.
  ///
  /// NULL values become `""`, and catalog fields with no row at all (entries
  /// written before the field existed) are filled with `""`. Rows for IDs
  /// outside the catalog are kept as-is.
  pub fn from_stored<I>(date: EntryDate, timestamp: DateTime<Utc>, rows: I) -> Self
  where
    I: IntoIterator<Item = (String, Option<String>)>,
  {
    let mut fields: Fields = rows
      .into_iter()
      .map(|(id, value)| (id, value.unwrap_or_default()))
      .collect();
    for id in FieldId::ALL {
      fields.entry(id.as_str().to_owned()).or_default();
    }
    Self { date, timestamp, fields }
  }

  /// Value of a catalog field; `""` when unset.
  pub fn field(&self, id: FieldId) -> &str {
    self.fields.get(id.as_str()).map(String::as_str).unwrap_or("")
  }
}

// ─── NewEntry ────────────────────────────────────────────────────────────────

/// Input to [`crate::store::EntryStore::save_entry`].
/// The timestamp is always set by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
  pub date:   EntryDate,
  pub fields: Fields,
}

impl NewEntry {
  pub fn new(date: EntryDate) -> Self {
    Self { date, fields: Fields::new() }
  }

  pub fn with_fields(date: EntryDate, fields: Fields) -> Self { Self { date, fields } }

  /// Builder-style setter for a single catalog field.
  pub fn with_field(mut self, id: FieldId, value: impl Into<String>) -> Self {
    self.fields.insert(id.as_str().to_owned(), value.into());
    self
  }

  /// One value per catalog field, in catalog order, ready to be written as
  /// field rows. Missing and empty values map to `None` (stored as NULL);
  /// keys outside the catalog are dropped.
  pub fn stored_values(&self) -> Vec<(FieldId, Option<String>)> {
    FieldId::ALL
      .into_iter()
      .map(|id| {
        let value = self
          .fields
          .get(id.as_str())
          .filter(|v| !v.is_empty())
          .cloned();
        (id, value)
      })
      .collect()
  }

  /// The entry as it reads back after being saved at `timestamp`.
  pub fn into_entry(self, timestamp: DateTime<Utc>) -> Entry {
    let rows = self
      .stored_values()
      .into_iter()
      .map(|(id, value)| (id.as_str().to_owned(), value));
    Entry::from_stored(self.date, timestamp, rows)
  }
}

// ─── EntrySummary ────────────────────────────────────────────────────────────

/// A `(date, working)` projection for month calendar views. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySummary {
  pub date:    EntryDate,
  /// The `WORKING` field value, `""` when unset.
  pub working: String,
}
