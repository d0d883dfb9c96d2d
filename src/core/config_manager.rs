// src/core/config_manager.rs
//! Configuration for the jobs, read once from the environment

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{JobError, Result};

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const AI_INTERNAL_API_KEY_VAR: &str = "AI_INTERNAL_API_KEY";
pub const API_KEY_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "BASE_URL";
pub const HTTP_TIMEOUT_SECS_VAR: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Connection settings for the recommendations API
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Settings for the recommendation sync job.
    ///
    /// `API_BASE_URL` falls back to the local API, `AI_INTERNAL_API_KEY` is required.
    pub fn for_sync<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, AI_INTERNAL_API_KEY_VAR)?;
        let base_url = non_empty(&lookup, API_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout = timeout(&lookup)?;

        Ok(Self::new(base_url, api_key, timeout))
    }

    /// Settings for the refresh trigger. Both `API_KEY` and `BASE_URL` are required.
    pub fn for_refresh<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_VAR)?;
        let base_url = required(&lookup, BASE_URL_VAR)?;
        let timeout = timeout(&lookup)?;

        Ok(Self::new(base_url, api_key, timeout))
    }

    fn new(base_url: String, api_key: String, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }
}

/// Load a local `.env` file if one exists. Variables already set in the
/// process environment are left untouched.
pub fn load_env_file() {
    report_env_file(dotenvy::dotenv());
}

/// Same as [`load_env_file`] for an explicit file
pub fn load_env_file_from(path: &Path) {
    report_env_file(dotenvy::from_path(path).map(|()| path.to_path_buf()));
}

fn report_env_file(result: std::result::Result<PathBuf, dotenvy::Error>) {
    match result {
        Ok(path) => info!("Loaded environment file {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
}

/// Lookup backed by the process environment
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.trim().is_empty())
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, var).ok_or(JobError::MissingConfig(var))
}

fn timeout<F>(lookup: &F) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_empty(lookup, HTTP_TIMEOUT_SECS_VAR) else {
        return Ok(None);
    };

    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| JobError::invalid_config(HTTP_TIMEOUT_SECS_VAR, e.to_string()))?;

    if secs == 0 {
        return Err(JobError::invalid_config(
            HTTP_TIMEOUT_SECS_VAR,
            "must be greater than zero",
        ));
    }

    Ok(Some(Duration::from_secs(secs)))
}
