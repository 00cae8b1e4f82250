//! Error types for `days-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid date {0:?}: expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("invalid month {year:?}/{month:?}")]
  InvalidMonth { year: String, month: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
