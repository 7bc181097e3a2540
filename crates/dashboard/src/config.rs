use std::path::PathBuf;

use taskflow_client::DEFAULT_BASE_URL;

/// Dashboard configuration loaded from environment variables.
///
/// All fields have sensible defaults; point `TASKFLOW_API_BASE_URL` at a
/// local fixture server to run without the public endpoint.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the placeholder API.
    pub api_base_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub request_timeout_secs: u64,
    /// Path of the persisted theme preference file.
    pub theme_file: PathBuf,
}

impl DashboardConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                             |
    /// |---------------------------------|-------------------------------------|
    /// | `TASKFLOW_API_BASE_URL`         | `https://jsonplaceholder.typicode.com` |
    /// | `TASKFLOW_REQUEST_TIMEOUT_SECS` | `10`                                |
    /// | `TASKFLOW_THEME_FILE`           | `.taskflow-theme.json`              |
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("TASKFLOW_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let request_timeout_secs: u64 = std::env::var("TASKFLOW_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("TASKFLOW_REQUEST_TIMEOUT_SECS must be a valid u64");

        let theme_file = std::env::var("TASKFLOW_THEME_FILE")
            .unwrap_or_else(|_| ".taskflow-theme.json".into())
            .into();

        Self {
            api_base_url,
            request_timeout_secs,
            theme_file,
        }
    }
}
