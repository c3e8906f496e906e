//! SQLite storage implementation

use std::path::{Path, PathBuf};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};
use crate::Result;
use crate::job::{JobPosting, SavedJob};
use super::clock::{Clock, SystemClock};
use super::schema;

/// SQLite-backed store of saved jobs.
///
/// The store owns a path, not a connection: `initialize`, `save`, `list`
/// and `count` each open a fresh connection and close it before returning.
pub struct JobStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl JobStore {
    /// Create a store backed by the given database file, stamped by the system clock
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }

    /// Create a store with a custom time source
    pub fn with_clock(path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        Self {
            path: path.into(),
            clock: Box::new(clock),
        }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the schema if absent. Safe to call repeatedly; existing rows are kept.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        tracing::debug!("Initialized job store at {}", self.path.display());
        Ok(())
    }

    /// Append a posting. `id` and `saved_at` are assigned here.
    pub fn save(&self, job: &JobPosting) -> Result<SavedJob> {
        let conn = self.connect()?;
        let saved_at = self.clock.now();

        conn.execute(
            r#"
            INSERT INTO saved_jobs (title, company, location, description, url, saved_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                job.title,
                job.company,
                job.location,
                job.description,
                job.url,
                format_timestamp(&saved_at),
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::info!("Saved job #{}: {} at {}", id, job.title, job.company);

        Ok(SavedJob {
            id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            url: job.url.clone(),
            saved_at,
        })
    }

    /// All saved jobs, most recently saved first
    pub fn list(&self) -> Result<Vec<SavedJob>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, company, location, description, url, saved_at
             FROM saved_jobs
             ORDER BY saved_at DESC, id DESC",
        )?;

        let jobs = stmt
            .query_map([], row_to_saved_job)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} saved jobs", jobs.len());
        Ok(jobs)
    }

    /// Count saved jobs
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM saved_jobs", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored `saved_at`.
///
/// Accepts RFC 3339 as well as SQLite's `CURRENT_TIMESTAMP` form
/// (`2025-06-01 10:30:00`, read as UTC) used by older databases.
fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ts| ts.and_utc()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").map(|ts| ts.and_utc()))
}

/// Helper to convert a row to a SavedJob
fn row_to_saved_job(row: &rusqlite::Row) -> rusqlite::Result<SavedJob> {
    let saved_at_str: String = row.get(6)?;
    let saved_at = parse_timestamp(&saved_at_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;

    // Older databases declare the text columns nullable
    let text = |idx: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
    };

    Ok(SavedJob {
        id: row.get(0)?,
        title: text(1)?,
        company: text(2)?,
        location: text(3)?,
        description: text(4)?,
        url: text(5)?,
        saved_at,
    })
}
