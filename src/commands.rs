use std::path::Path;
use jobscout::config::{self, JobscoutConfig};
use jobscout::output::{emit_success, OutputMode};
use jobscout::ui::{self, Icons, Level};
use jobscout::{JobPosting, JobStore, ResumeAnalysis, SavedJob};
use owo_colors::OwoColorize;

const BLANK_QUERY_WARNING: &str = "Please enter a job role to search.";
const BLANK_RESUME_WARNING: &str = "Please paste your resume text first.";

pub fn run_init(
    output_mode: OutputMode,
    store: &JobStore,
    config_path: &Path,
    config: JobscoutConfig,
    force: bool,
) -> anyhow::Result<()> {
    config::write_config(config_path, &config, force)?;
    tracing::info!("Wrote config to {}", config_path.display());
    let saved_jobs = store.count()?;

    if output_mode.is_human() {
        ui::notice(Level::Ok, &format!("Created {}", config_path.display()));
        ui::info(Icons::DATABASE, "Database", &store.path().display().to_string());
        ui::info(Icons::SAVE, "Saved jobs", &saved_jobs.to_string());
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "database": store.path().display().to_string(),
            "default_location": config.default_location,
            "saved_jobs": saved_jobs,
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}

/// Postings for a query and the ones saved from it
struct SearchOutcome {
    jobs: Vec<JobPosting>,
    saved: Vec<SavedJob>,
}

/// Run the search and save the requested 1-based results.
///
/// Every index is checked before anything is written, so a bad index saves nothing.
/// A blank query yields `None`.
fn search_and_save(
    store: &JobStore,
    query: &str,
    location: Option<&str>,
    save: &[usize],
) -> anyhow::Result<Option<SearchOutcome>> {
    if query.trim().is_empty() {
        return Ok(None);
    }

    let jobs = jobscout::search_jobs(query, location);

    let mut picked = Vec::with_capacity(save.len());
    for &n in save {
        let Some(job) = n.checked_sub(1).and_then(|i| jobs.get(i)) else {
            anyhow::bail!("no job #{} to save (search returned {} results)", n, jobs.len());
        };
        picked.push(job);
    }

    let saved = picked
        .into_iter()
        .map(|job| store.save(job))
        .collect::<jobscout::Result<Vec<_>>>()?;

    Ok(Some(SearchOutcome { jobs, saved }))
}

fn warning_data(warning: &str) -> serde_json::Value {
    serde_json::json!({ "warning": warning })
}

pub fn run_search(
    output_mode: OutputMode,
    store: &JobStore,
    query: &str,
    location: Option<&str>,
    save: &[usize],
) -> anyhow::Result<()> {
    let Some(SearchOutcome { jobs, saved }) = search_and_save(store, query, location, save)? else {
        ui::notice(Level::Warn, BLANK_QUERY_WARNING);
        if !output_mode.is_human() {
            emit_success(output_mode, "search", warning_data(BLANK_QUERY_WARNING))?;
        }
        return Ok(());
    };

    if output_mode.is_human() {
        ui::header(Icons::SEARCH, &format!("Searching jobs for '{}'", query));
        ui::notice(Level::Ok, &format!("Found {} job(s):", jobs.len()));
        for (i, job) in jobs.iter().enumerate() {
            render_posting(i + 1, job);
        }
        if !saved.is_empty() {
            println!();
            for job in &saved {
                ui::notice(Level::Ok, &format!("Job saved! ({} at {}, #{})", job.title, job.company, job.id));
            }
        }
    } else {
        let data = serde_json::json!({
            "query": query,
            "jobs": jobs,
            "saved": saved,
        });
        emit_success(output_mode, "search", data)?;
    }
    Ok(())
}

fn render_posting(n: usize, job: &JobPosting) {
    ui::heading(n, &job.title);
    println!("  {} {}  {} {}", Icons::BRIEFCASE, job.company, Icons::PIN, job.location);
    ui::field("Description", &job.description);
    ui::field("URL", &job.url);
    ui::field("Posted", &job.posted_date);
    ui::field("Skills", &job.skills_display());
}

pub fn run_analyze(output_mode: OutputMode, text: &str) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        ui::notice(Level::Warn, BLANK_RESUME_WARNING);
        if !output_mode.is_human() {
            emit_success(output_mode, "analyze", warning_data(BLANK_RESUME_WARNING))?;
        }
        return Ok(());
    }

    let analysis = jobscout::analyze(text);
    tracing::debug!("Resume analysis found {} skills", analysis.skills.len());

    if output_mode.is_human() {
        ui::header(Icons::RESUME, "Resume Analysis");
        render_analysis(&analysis);
    } else {
        emit_success(output_mode, "analyze", &analysis)?;
    }
    Ok(())
}

fn render_analysis(analysis: &ResumeAnalysis) {
    let contact = |present: bool, value: &str| {
        if present { value.to_string() } else { ui::faint(value) }
    };
    ui::info(Icons::EMAIL, "Email", &contact(analysis.has_email(), &analysis.email));
    ui::info(Icons::PHONE, "Phone", &contact(analysis.has_phone(), &analysis.phone));
    ui::info(Icons::INFO, "Word Count", &analysis.word_count.to_string());
    ui::info(Icons::INFO, "Character Count", &analysis.text_length.to_string());
    ui::info(Icons::STAR, "Skills Found", &analysis.skills_display());
}

pub fn run_save(output_mode: OutputMode, store: &JobStore, job: &JobPosting) -> anyhow::Result<()> {
    let saved = store.save(job)?;

    if output_mode.is_human() {
        ui::notice(Level::Ok, &format!("Job saved! (#{})", saved.id));
        ui::field("Title", &saved.title);
        ui::field("Company", &saved.company);
    } else {
        emit_success(output_mode, "save", &saved)?;
    }
    Ok(())
}

pub fn run_saved(output_mode: OutputMode, store: &JobStore, table: bool) -> anyhow::Result<()> {
    let jobs = store.list()?;

    if output_mode.is_human() {
        ui::header(Icons::SAVE, "Saved Jobs");
        if jobs.is_empty() {
            ui::info(Icons::INFO, "Saved jobs", "No saved jobs yet.");
        } else if table {
            println!("{}", ui::saved_jobs_table(&jobs));
        } else {
            for job in &jobs {
                println!(
                    "- {} at {} ({}) - saved on {}",
                    job.title.style(ui::theme().accent),
                    job.company,
                    job.location,
                    ui::faint(&job.saved_at.format("%Y-%m-%d %H:%M:%S").to_string())
                );
            }
        }
        println!();
        println!("{}", ui::faint(&format!("{} saved job(s) in {}", jobs.len(), store.path().display())));
    } else {
        let data = serde_json::json!({
            "count": jobs.len(),
            "jobs": jobs,
        });
        emit_success(output_mode, "saved", data)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> JobStore {
        let store = JobStore::new(dir.path().join("jobs.db"));
        store.initialize().unwrap();
        store
    }

    #[test]
    fn test_save_index_is_one_based() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        run_search(OutputMode::Json, &store, "Rust", Some("Berlin"), &[1]).unwrap();

        let jobs = store.list().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Rust Developer");
        assert_eq!(jobs[0].company, "Tech Company A");
        assert_eq!(jobs[0].location, "Berlin");
    }

    #[test]
    fn test_out_of_range_index_saves_nothing() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        for bad in [0, 3] {
            let err = run_search(OutputMode::Json, &store, "Rust", None, &[bad]).unwrap_err();
            assert!(err.to_string().contains(&format!("no job #{}", bad)));
        }
        // A valid index ahead of a bad one is not saved either
        assert!(run_search(OutputMode::Json, &store, "Rust", None, &[2, 3]).is_err());

        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_saving_both_results() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let outcome = search_and_save(&store, "Go", None, &[2, 1]).unwrap().unwrap();
        assert_eq!(outcome.jobs.len(), 2);
        assert_eq!(outcome.saved[0].title, "Senior Go");
        assert_eq!(outcome.saved[1].title, "Go Developer");
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_blank_query_saves_nothing() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        assert!(search_and_save(&store, "   ", None, &[1]).unwrap().is_none());
        run_search(OutputMode::Json, &store, "", None, &[1]).unwrap();
        run_search(OutputMode::Human, &store, " \t", None, &[1, 2]).unwrap();

        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_blank_resume_is_a_warning_not_an_error() {
        run_analyze(OutputMode::Json, "").unwrap();
        run_analyze(OutputMode::Human, "  \n ").unwrap();
        run_analyze(OutputMode::Json, "Python developer, jane@example.com").unwrap();
    }

    #[test]
    fn test_warning_payload() {
        let data = warning_data(BLANK_QUERY_WARNING);
        assert_eq!(data["warning"], "Please enter a job role to search.");
        assert_eq!(warning_data(BLANK_RESUME_WARNING)["warning"], "Please paste your resume text first.");
    }

    #[test]
    fn test_saved_lists_after_save() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        run_save(OutputMode::Json, &store, &JobPosting::new("SRE", "Startup B", "", "", "")).unwrap();
        run_saved(OutputMode::Human, &store, true).unwrap();
        run_saved(OutputMode::Json, &store, false).unwrap();

        assert_eq!(store.list().unwrap()[0].title, "SRE");
    }
}
