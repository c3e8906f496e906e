//! Job types
//!
//! - `JobPosting`: an ephemeral posting produced by search
//! - `SavedJob`: a posting the user chose to keep, as persisted by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::Result;

/// A job posting as returned by search.
///
/// Every field may be empty. When deserialized, missing fields default
/// to empty values so partially filled JSON can still be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Opaque link to the posting
    pub url: String,
    /// Date-like text, e.g. "2025-06-01"
    pub posted_date: String,
    pub skills: Vec<String>,
}

impl JobPosting {
    /// Create a posting with the fields the store persists
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: description.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the posted date
    pub fn with_posted_date(mut self, posted_date: impl Into<String>) -> Self {
        self.posted_date = posted_date.into();
        self
    }

    /// Builder method to set the skills
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Load a posting from a JSON file. Missing fields become empty.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Skills as a comma-separated list
    pub fn skills_display(&self) -> String {
        self.skills.join(", ")
    }
}

/// A job posting persisted by the store.
///
/// `id` and `saved_at` are always assigned by the store, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedJob {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub saved_at: DateTime<Utc>,
}

impl std::fmt::Display for SavedJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} ({}) - saved on {}",
            self.title,
            self.company,
            self.location,
            self.saved_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
