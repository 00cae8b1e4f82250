//! Calendar identifiers: the per-entry [`EntryDate`] and the [`YearMonth`]
//! used by month listings.
//!
//! Both are validated on construction, so the storage layer never sees an
//! identifier outside the `YYYY-MM-DD` / `YYYY-MM` shapes it indexes on.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── EntryDate ───────────────────────────────────────────────────────────────

/// The calendar date that keys a journal entry.
///
/// Always renders as a zero-padded `YYYY-MM-DD` string, so lexicographic order
/// of the rendered form is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
  /// Parse a strict `YYYY-MM-DD` date.
  ///
  /// Rejects anything whose canonical rendering differs from the input
  /// (`2025-3-1`, `+2025-03-01`, trailing text).
  pub fn parse(s: &str) -> Result<Self> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
      .map_err(|_| Error::InvalidDate(s.to_owned()))?;
    let parsed = Self(date);
    if parsed.to_string() != s {
      return Err(Error::InvalidDate(s.to_owned()));
    }
    Ok(parsed)
  }
}

impl fmt::Display for EntryDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(DATE_FORMAT))
  }
}

impl FromStr for EntryDate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl Serialize for EntryDate {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for EntryDate {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    Self::parse(&s).map_err(serde::de::Error::custom)
  }
}

// ─── YearMonth ───────────────────────────────────────────────────────────────

/// A calendar month, the unit of the month listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
  year:  i32,
  month: u32,
}

impl YearMonth {
  /// Build a month from numeric parts. `year` must fit four digits and
  /// `month` must be `1..=12`.
  pub fn new(year: i32, month: u32) -> Result<Self> {
    if !(0..=9999).contains(&year) || !(1..=12).contains(&month) {
      return Err(Error::InvalidMonth {
        year:  year.to_string(),
        month: month.to_string(),
      });
    }
    Ok(Self { year, month })
  }

  /// Parse the textual `{year}/{month}` pair taken from a request path.
  ///
  /// Both parts must be plain ASCII digits; signs and whitespace are
  /// rejected.
  pub fn parse(year: &str, month: &str) -> Result<Self> {
    let invalid = || Error::InvalidMonth {
      year:  year.to_owned(),
      month: month.to_owned(),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(year) || !digits(month) {
      return Err(invalid());
    }
    let y: i32 = year.parse().map_err(|_| invalid())?;
    let m: u32 = month.parse().map_err(|_| invalid())?;
    Self::new(y, m).map_err(|_| invalid())
  }

  /// The `YYYY-MM-` prefix shared by every [`EntryDate`] in this month.
  pub fn date_prefix(&self) -> String {
    format!("{:04}-{:02}-", self.year, self.month)
  }
}

impl fmt::Display for YearMonth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.month)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_canonical_dates() {
    let d = EntryDate::parse("2025-03-01").unwrap();
    assert_eq!(d.to_string(), "2025-03-01");
    assert!(d.to_string().starts_with(&YearMonth::new(2025, 3).unwrap().date_prefix()));
  }

  #[test]
  fn rejects_non_canonical_dates() {
    for bad in ["2025-3-1", "2025-02-30", "20250301", "2025-03-01x", "", "month"] {
      assert!(
        matches!(EntryDate::parse(bad), Err(Error::InvalidDate(_))),
        "accepted {bad:?}"
      );
    }
  }

  #[test]
  fn date_serializes_as_plain_string() {
    let d = EntryDate::parse("2024-12-31").unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-12-31\"");
    let back: EntryDate = serde_json::from_str("\"2024-12-31\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<EntryDate>("\"2024-13-01\"").is_err());
  }

  #[test]
  fn year_month_bounds() {
    assert!(YearMonth::new(2025, 0).is_err());
    assert!(YearMonth::new(2025, 13).is_err());
    assert!(YearMonth::new(-1, 5).is_err());
    assert!(YearMonth::new(10_000, 5).is_err());
    assert!(YearMonth::new(2025, 12).is_ok());
  }

  #[test]
  fn year_month_parse_from_path_parts() {
    let ym = YearMonth::parse("2025", "03").unwrap();
    assert_eq!(ym, YearMonth::new(2025, 3).unwrap());
    assert_eq!(YearMonth::parse("2025", "3").unwrap(), ym);
    assert_eq!(ym.date_prefix(), "2025-03-");
    assert_eq!(ym.to_string(), "2025-03");

    assert!(matches!(
      YearMonth::parse("twenty", "3"),
      Err(Error::InvalidMonth { .. })
    ));
    assert!(YearMonth::parse("2025", "").is_err());
  }

  #[test]
  fn year_month_parse_rejects_signs_and_whitespace() {
    for (year, month) in [
      (" 3 ", "+3"),
      ("2025", "+3"),
      ("-2025", "3"),
      ("2025", " 3"),
      ("2025\n", "3"),
    ] {
      assert!(
        matches!(YearMonth::parse(year, month), Err(Error::InvalidMonth { .. })),
        "accepted {year:?}/{month:?}"
      );
    }
  }
}
