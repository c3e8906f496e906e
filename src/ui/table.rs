use crate::job::SavedJob;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct SavedJobRow {
    #[tabled(rename = "#")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Company")]
    pub company: String,
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Saved")]
    pub saved_at: String,
}

impl From<&SavedJob> for SavedJobRow {
    fn from(job: &SavedJob) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            saved_at: job.saved_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Rounded table of saved jobs, empty string when there are none
pub fn saved_jobs_table(jobs: &[SavedJob]) -> String {
    if jobs.is_empty() {
        return String::new();
    }

    let rows: Vec<SavedJobRow> = jobs.iter().map(SavedJobRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_table_lists_each_job() {
        let saved_at = Utc.with_ymd_and_hms(2025, 6, 2, 8, 15, 0).unwrap();
        let jobs = vec![
            SavedJob {
                id: 2,
                title: "Senior Rust".into(),
                company: "Startup B".into(),
                location: "San Francisco, CA".into(),
                description: String::new(),
                url: String::new(),
                saved_at,
            },
            SavedJob {
                id: 1,
                title: "Rust Developer".into(),
                company: "Tech Company A".into(),
                location: "Remote".into(),
                description: String::new(),
                url: String::new(),
                saved_at,
            },
        ];

        let table = saved_jobs_table(&jobs);
        assert!(table.contains("Senior Rust"));
        assert!(table.contains("Tech Company A"));
        assert!(table.contains("2025-06-02 08:15:00"));
        assert!(saved_jobs_table(&[]).is_empty());
    }
}
