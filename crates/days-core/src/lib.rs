//! Core types and trait definitions for the Days journal.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod date;
pub mod entry;
pub mod error;
pub mod store;

pub use date::{EntryDate, YearMonth};
pub use entry::{Entry, EntrySummary, FieldId, Fields, NewEntry};
pub use error::{Error, Result};
