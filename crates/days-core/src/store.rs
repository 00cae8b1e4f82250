//! The `EntryStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `days-store-sqlite`).
//! Higher layers (`days-api`, `days-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  date::{EntryDate, YearMonth},
  entry::{Entry, EntrySummary, NewEntry},
};

/// Abstraction over a journal storage backend.
///
/// Every save is a full overwrite of an entry's field set, applied
/// atomically. There is no partial-field update path.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait EntryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the entry for `date`. Returns `None` if nothing was saved for
  /// that date.
  fn get_entry(
    &self,
    date: EntryDate,
  ) -> impl Future<Output = Result<Option<Entry>, Self::Error>> + Send + '_;

  /// Create or replace the entry for `input.date` and return it as stored.
  ///
  /// The timestamp is set by the store. Field rows from any previous save
  /// for the same date are discarded; one row per catalog field is written.
  fn save_entry(
    &self,
    input: NewEntry,
  ) -> impl Future<Output = Result<Entry, Self::Error>> + Send + '_;

  /// Delete the entry for `date` along with its field rows. Deleting a date
  /// with no entry succeeds.
  fn delete_entry(
    &self,
    date: EntryDate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Dates with an entry in `month`, ascending.
  fn list_dates_by_month(
    &self,
    month: YearMonth,
  ) -> impl Future<Output = Result<Vec<EntryDate>, Self::Error>> + Send + '_;

  /// One `(date, working)` summary per entry in `month`, ascending by date.
  fn list_summaries_by_month(
    &self,
    month: YearMonth,
  ) -> impl Future<Output = Result<Vec<EntrySummary>, Self::Error>> + Send + '_;
}
