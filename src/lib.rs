//! # Jobscout - job search sandbox
//!
//! Jobscout provides:
//! - Mock job search that templates a role query into sample postings
//! - Resume keyword extraction (skills, email, phone, counts)
//! - SQLite-backed store of saved job postings, most recent first
//! - Terminal and JSON rendering for the `jobscout` CLI

pub mod job;
pub mod resume;
pub mod search;
pub mod storage;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use job::{JobPosting, SavedJob};
pub use resume::{analyze, ResumeAnalysis};
pub use search::search_jobs;
pub use storage::JobStore;

/// Result type alias for Jobscout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Jobscout operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid job JSON: {0}")]
    Json(#[from] serde_json::Error),
}
