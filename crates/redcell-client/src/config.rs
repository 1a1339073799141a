//! Client configuration, sourced from the environment.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Read once at startup. Unset or unparsable variables fall back to
/// the defaults.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, `REDCELL_API_URL`.
    pub base_url: String,
    /// Per-request deadline, `REDCELL_TIMEOUT_SECS`. Generous because
    /// provider passthrough calls block on third parties.
    pub timeout: Duration,
    /// Override for the token file location, `REDCELL_TOKEN_FILE`.
    pub token_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("REDCELL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = std::env::var("REDCELL_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let token_file = std::env::var("REDCELL_TOKEN_FILE").ok().map(PathBuf::from);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            token_file,
        }
    }

    /// Versioned root every request path is joined onto.
    pub fn api_base(&self) -> String {
        format!("{}/api/v1", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token_file: None,
        }
    }
}
