//! SQLite implementation of [`EntryStore`] backed by [`SqliteStore`].

use std::path::Path;

use chrono::{SubsecRound as _, Utc};
use rusqlite::{OptionalExtension as _, TransactionBehavior};

use days_core::{
  date::{EntryDate, YearMonth},
  entry::{Entry, EntrySummary, FieldId, NewEntry},
  store::EntryStore,
};

use crate::{
  encode::{
    RawEntry, RawField, RawSummary, decode_date, encode_date, encode_dt,
  },
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A journal store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every
/// operation runs on the connection's background thread, one at a time.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── EntryStore impl ─────────────────────────────────────────────────────────

impl EntryStore for SqliteStore {
  type Error = crate::Error;

  async fn get_entry(&self, date: EntryDate) -> Result<Option<Entry>> {
    let date_str = encode_date(date);

    let raw: Option<RawEntry> = self
      .conn
      .call(move |conn| {
        // Header and fields are read in one transaction so a concurrent save
        // can never be observed half-applied.
        let tx = conn.transaction()?;

        let timestamp: Option<String> = tx
          .query_row(
            "SELECT timestamp FROM entries WHERE date = ?1",
            rusqlite::params![date_str],
            |row| row.get(0),
          )
          .optional()?;

        let Some(timestamp) = timestamp else {
          return Ok(None);
        };

        let fields = {
          let mut stmt =
            tx.prepare("SELECT field_id, value FROM details WHERE date = ?1")?;
          stmt
            .query_map(rusqlite::params![date_str], |row| {
              Ok(RawField {
                field_id: row.get(0)?,
                value:    row.get(1)?,
              })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };

        tx.commit()?;
        Ok(Some(RawEntry { timestamp, fields }))
      })
      .await?;

    raw.map(|r| r.into_entry(date)).transpose()
  }

  async fn save_entry(&self, input: NewEntry) -> Result<Entry> {
    let timestamp = Utc::now().trunc_subsecs(0);

    let date_str = encode_date(input.date);
    let ts_str   = encode_dt(timestamp);
    let values: Vec<(&'static str, Option<String>)> = input
      .stored_values()
      .into_iter()
      .map(|(id, value)| (id.as_str(), value))
      .collect();

    self
      .conn
      .call(move |conn| {
        // Upsert header, drop old fields, write the full catalog. Dropping
        // `tx` on any early return rolls everything back.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
          "INSERT INTO entries (date, timestamp) VALUES (?1, ?2)
           ON CONFLICT(date) DO UPDATE SET timestamp = excluded.timestamp",
          rusqlite::params![date_str, ts_str],
        )?;

        tx.execute(
          "DELETE FROM details WHERE date = ?1",
          rusqlite::params![date_str],
        )?;

        {
          let mut stmt = tx.prepare(
            "INSERT INTO details (date, field_id, value) VALUES (?1, ?2, ?3)",
          )?;
          for (field_id, value) in &values {
            stmt.execute(rusqlite::params![date_str, field_id, value])?;
          }
        }

        tx.commit()?;
        Ok(())
      })
      .await?;

    Ok(input.into_entry(timestamp))
  }

  async fn delete_entry(&self, date: EntryDate) -> Result<()> {
    let date_str = encode_date(date);

    // `details` rows go with the header via ON DELETE CASCADE.
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM entries WHERE date = ?1",
          rusqlite::params![date_str],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_dates_by_month(&self, month: YearMonth) -> Result<Vec<EntryDate>> {
    let pattern = format!("{}%", month.date_prefix());

    let raws: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn
          .prepare("SELECT date FROM entries WHERE date LIKE ?1 ORDER BY date")?;
        let rows = stmt
          .query_map(rusqlite::params![pattern], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    raws.iter().map(|s| decode_date(s)).collect()
  }

  async fn list_summaries_by_month(
    &self,
    month: YearMonth,
  ) -> Result<Vec<EntrySummary>> {
    let pattern  = format!("{}%", month.date_prefix());
    let field_id = FieldId::Working.as_str();

    let raws: Vec<RawSummary> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT e.date, COALESCE(d.value, '') AS working
           FROM entries e
           LEFT JOIN details d ON d.date = e.date AND d.field_id = ?1
           WHERE e.date LIKE ?2
           ORDER BY e.date",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![field_id, pattern], |row| {
            Ok(RawSummary {
              date:    row.get(0)?,
              working: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSummary::into_summary).collect()
  }
}
