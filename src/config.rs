use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// Time and concurrency constants
// =============================================================================

/// Timeout for a single upstream request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Number of upstream requests allowed in flight at once
pub const MAX_CONCURRENT_FETCHES: usize = 8;

/// Environment variable holding the GitHub token
pub const GITHUB_TOKEN_ENV: &str = "CDN_UPDATES_GITHUB_TOKEN";

const LOG_FILE_NAME: &str = "cdn-updates.log";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Sent as `Authorization: token <value>` to GitHub
    pub github_token: Option<String>,
    /// Verbose logging
    pub debug: bool,
    pub fetch_timeout_ms: u64,
    pub max_concurrent_fetches: usize,
    pub unpinned_policy: UnpinnedPolicy,
    pub endpoints: EndpointsConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            github_token: None,
            debug: false,
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            max_concurrent_fetches: MAX_CONCURRENT_FETCHES,
            unpinned_policy: UnpinnedPolicy::default(),
            endpoints: EndpointsConfig::default(),
        }
    }
}

impl CheckerConfig {
    /// Load a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file (if any), then command-line overrides, then the token
    /// from the environment when neither provided one
    pub fn load(
        path: Option<&Path>,
        token: Option<String>,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if token.is_some() {
            config.github_token = token;
        }
        config.debug |= debug;
        Ok(config.with_env_token())
    }

    /// Fill the token from the environment when the config has none
    pub fn with_env_token(mut self) -> Self {
        if self.github_token.is_none() {
            self.github_token = std::env::var(GITHUB_TOKEN_ENV)
                .ok()
                .filter(|token| !token.is_empty());
        }
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Status given to references that pin no version
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UnpinnedPolicy {
    /// Unpinned references need attention
    #[default]
    ToUpdate,
    NotFound,
}

/// Upstream base URLs
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointsConfig {
    pub cdnjs: String,
    pub github: String,
    pub npm: String,
    pub wordpress: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            cdnjs: "https://api.cdnjs.com".to_string(),
            github: "https://api.github.com".to_string(),
            npm: "https://registry.npmjs.org".to_string(),
            wordpress: "https://plugins.svn.wordpress.org".to_string(),
        }
    }
}

/// Log file used when `--log-file` is given without a path:
/// `$XDG_DATA_HOME/cdn-updates/cdn-updates.log`, else
/// `~/.local/share/cdn-updates/cdn-updates.log`, else `./cdn-updates/cdn-updates.log`.
pub fn default_log_path() -> PathBuf {
    log_path_from(std::env::var_os("XDG_DATA_HOME").map(PathBuf::from), dirs::home_dir())
}

fn log_path_from(xdg_data_home: Option<PathBuf>, home_dir: Option<PathBuf>) -> PathBuf {
    xdg_data_home
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(env!("CARGO_PKG_NAME"))
        .join(LOG_FILE_NAME)
}
