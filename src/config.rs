use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database file used when neither the flag nor the config names one
pub const DEFAULT_DATABASE: &str = "job_search.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct JobscoutConfig {
    pub database: Option<String>,
    /// Location for `search` when `--location` is omitted
    pub default_location: Option<String>,
}

impl JobscoutConfig {
    /// Resolve the database path: explicit flag, then config, then the default
    pub fn database_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("jobscout.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<JobscoutConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: JobscoutConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// Refuse to clobber an existing config unless forced
pub fn ensure_config_writable(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }
    Ok(())
}

pub fn write_config(path: &Path, config: &JobscoutConfig, force: bool) -> anyhow::Result<()> {
    ensure_config_writable(path, force)?;

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
