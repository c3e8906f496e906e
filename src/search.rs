//! Mock job search
//!
//! There is no search backend. Every query yields the same two postings with
//! the role templated into the title and description.

use crate::job::JobPosting;

/// Location used for the first posting when none is given
pub const DEFAULT_LOCATION: &str = "Remote";

/// Location used for the second posting when none is given
pub const SECONDARY_LOCATION: &str = "San Francisco, CA";

/// Synthesize postings for a role query and optional location.
///
/// A blank (empty or whitespace-only) location falls back to the
/// per-posting default.
pub fn search_jobs(query: &str, location: Option<&str>) -> Vec<JobPosting> {
    let location = location.map(str::trim).filter(|l| !l.is_empty());
    let skill = query.to_lowercase();

    tracing::debug!("Mock search for '{}' (location: {:?})", query, location);

    vec![
        JobPosting::new(
            format!("{} Developer", query),
            "Tech Company A",
            location.unwrap_or(DEFAULT_LOCATION),
            format!("Looking for experienced {} developer", query),
            "https://example.com/job/1",
        )
        .with_posted_date("2025-06-01")
        .with_skills([skill.as_str(), "python", "javascript"]),
        JobPosting::new(
            format!("Senior {}", query),
            "Startup B",
            location.unwrap_or(SECONDARY_LOCATION),
            format!("Senior {} position with growth opportunities", query),
            "https://example.com/job/2",
        )
        .with_posted_date("2025-06-02")
        .with_skills([skill.as_str(), "react", "node.js"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_templated_results() {
        let jobs = search_jobs("Rust", Some("Berlin"));
        assert_eq!(jobs.len(), 2);

        assert_eq!(jobs[0].title, "Rust Developer");
        assert_eq!(jobs[0].company, "Tech Company A");
        assert_eq!(jobs[0].location, "Berlin");
        assert_eq!(jobs[0].description, "Looking for experienced Rust developer");
        assert_eq!(jobs[0].skills, vec!["rust", "python", "javascript"]);

        assert_eq!(jobs[1].title, "Senior Rust");
        assert_eq!(jobs[1].location, "Berlin");
        assert_eq!(jobs[1].posted_date, "2025-06-02");
        assert_eq!(jobs[1].skills_display(), "rust, react, node.js");
    }

    #[test]
    fn test_blank_location_uses_defaults() {
        for location in [None, Some(""), Some("   ")] {
            let jobs = search_jobs("Data Engineer", location);
            assert_eq!(jobs[0].location, DEFAULT_LOCATION);
            assert_eq!(jobs[1].location, SECONDARY_LOCATION);
        }
    }
}
