//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite table:
//! - saved_jobs(id, title, company, location, description, url, saved_at)
//!
//! Rows are append-only. Every store operation opens and closes its own
//! connection.

pub mod clock;
pub mod schema;
pub mod sqlite;

pub use clock::{Clock, SystemClock};
pub use sqlite::JobStore;
