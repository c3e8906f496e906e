//! Jobscout CLI - mock job search, resume analysis and saved jobs

mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use jobscout::config::{self, JobscoutConfig};
use jobscout::output::OutputMode;
use jobscout::{JobPosting, JobStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(version)]
#[command(about = "Job search sandbox - mock search, resume analysis and saved jobs")]
#[command(long_about = r#"
Jobscout searches sample job postings, pulls contact details and skill
keywords out of resume text, and keeps the postings you save in a local
SQLite database.

Example usage:
  jobscout search --query "Python Developer" --location Berlin --save 1
  jobscout analyze --file resume.txt
  jobscout saved
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file and create the database
    Init {
        /// Default location for searches
        #[arg(short, long)]
        location: Option<String>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Search sample job postings for a role
    Search {
        /// Job role, e.g. "Python Developer"
        #[arg(short, long)]
        query: String,

        /// Location (blank means the posting's default)
        #[arg(short, long)]
        location: Option<String>,

        /// Save the n-th result (1-based); repeatable
        #[arg(short, long)]
        save: Vec<usize>,
    },

    /// Extract email, phone, counts and skills from resume text
    Analyze {
        /// Read the resume from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Resume text given inline (stdin is read when neither flag is set)
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Save a job posting given field by field or as JSON
    Save {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        url: String,

        /// Read the posting from a JSON file; missing fields are left empty
        #[arg(long, conflicts_with_all = ["title", "company", "location", "description", "url"])]
        from_json: Option<PathBuf>,
    },

    /// List saved jobs, most recent first
    Saved {
        /// Render as a table
        #[arg(short, long)]
        table: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        jobscout::ui::notice(jobscout::ui::Level::Error, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output_mode = OutputMode::from_json_flag(cli.json);
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(Some(&config_path))?.unwrap_or_default();

    let database = config.database_path(cli.database.as_deref());

    match cli.command {
        Commands::Init { location, force } => {
            // Reject before the database is created
            config::ensure_config_writable(&config_path, force)?;
            let store = open_store(&database)?;
            let new_config = JobscoutConfig {
                database: Some(database.display().to_string()),
                default_location: location.or(config.default_location),
            };
            commands::run_init(output_mode, &store, &config_path, new_config, force)?;
        }

        Commands::Search { query, location, save } => {
            let location = location.or(config.default_location);
            let store = open_store(&database)?;
            commands::run_search(output_mode, &store, &query, location.as_deref(), &save)?;
        }

        Commands::Analyze { file, text } => {
            let text = match (file, text) {
                (Some(path), _) => std::fs::read_to_string(&path)?,
                (None, Some(text)) => text,
                (None, None) => std::io::read_to_string(std::io::stdin())?,
            };
            commands::run_analyze(output_mode, &text)?;
        }

        Commands::Save { title, company, location, description, url, from_json } => {
            let job = match from_json {
                Some(path) => JobPosting::from_json_file(&path)?,
                None => JobPosting::new(title, company, location, description, url),
            };
            let store = open_store(&database)?;
            commands::run_save(output_mode, &store, &job)?;
        }

        Commands::Saved { table } => {
            let store = open_store(&database)?;
            commands::run_saved(output_mode, &store, table)?;
        }
    }

    Ok(())
}

/// Create the database directory and schema; only commands that touch storage call this
fn open_store(database: &Path) -> anyhow::Result<JobStore> {
    config::ensure_db_dir(database)?;
    let store = JobStore::new(database);
    store.initialize()?;
    tracing::debug!("Using database {}", database.display());
    Ok(store)
}
