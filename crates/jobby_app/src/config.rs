use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use jobby_core::StaleResponsePolicy;
use jobby_engine::{TransportSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

const CONFIG_FILENAME: &str = "jobby.ron";
const TOKEN_FILENAME: &str = "token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub token_path: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub stale_response_policy: StaleResponsePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        let transport = TransportSettings::default();
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: transport.connect_timeout.as_secs(),
            request_timeout_secs: transport.request_timeout.as_secs(),
            token_path: None,
            log_destination: LogDestination::default(),
            stale_response_policy: StaleResponsePolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..TransportSettings::default()
        }
    }

    /// Explicit `token_path`, else the platform data dir, else `./.jobby_token`.
    pub fn token_path(&self) -> PathBuf {
        if let Some(path) = &self.token_path {
            return path.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(TOKEN_FILENAME))
            .unwrap_or_else(|| PathBuf::from(".jobby_token"))
    }
}

/// Loads `explicit` if given (it must exist), otherwise the platform config
/// file when present, otherwise defaults.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return read(path);
    }
    match project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME)) {
        Some(path) if path.exists() => read(&path),
        _ => Ok(AppConfig::default()),
    }
}

fn read(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn parse(content: &str) -> Result<AppConfig> {
    Ok(ron::from_str(content)?)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("in", "ccbp", "jobby")
}
