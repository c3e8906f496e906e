//! Database schema definitions

/// SQL to create the saved_jobs table
///
/// `saved_at` holds RFC 3339 UTC timestamps. The store writes them with
/// fixed nanosecond width; rows inserted without one get SQLite's
/// millisecond clock.
pub const CREATE_SAVED_JOBS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS saved_jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL DEFAULT '',
    company TEXT NOT NULL DEFAULT '',
    location TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    url TEXT NOT NULL DEFAULT '',
    saved_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_saved_jobs_saved_at ON saved_jobs(saved_at)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_SAVED_JOBS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
