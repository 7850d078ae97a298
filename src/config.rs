use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CleanupConfig {
    pub databases: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// The primary application database ("users" plus catalog tables).
    pub agf: String,
    /// The connectivity-report store.
    pub connectivity: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        // The tool runs from the app checkout root, next to database/.
        Self {
            agf: "database/agf_database.db".into(),
            connectivity: "database/connectivity.db".into(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Returns the default config file path: `agf-cleanup.toml` in the working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("agf-cleanup.toml")
}

impl CleanupConfig {
    /// Load config from the TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CleanupConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (AGF_CLEANUP_AGF_DB,
    /// AGF_CLEANUP_CONNECTIVITY_DB, AGF_CLEANUP_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("AGF_CLEANUP_AGF_DB") {
            self.databases.agf = val;
        }
        if let Ok(val) = std::env::var("AGF_CLEANUP_CONNECTIVITY_DB") {
            self.databases.connectivity = val;
        }
        if let Ok(val) = std::env::var("AGF_CLEANUP_LOG_LEVEL") {
            self.log.level = val;
        }
    }

    /// Resolve the AGF database path, expanding `~` if needed.
    pub fn agf_db_path(&self) -> PathBuf {
        expand_tilde(&self.databases.agf)
    }

    /// Resolve the connectivity database path, expanding `~` if needed.
    pub fn connectivity_db_path(&self) -> PathBuf {
        expand_tilde(&self.databases.connectivity)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
