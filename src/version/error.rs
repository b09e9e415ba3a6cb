use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("No versions published for {0}")]
    NoVersions(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RegistryError {
    /// Whether the failure happened on the way to the upstream rather than
    /// in the data it returned
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RegistryError::Network(_)
                | RegistryError::Timeout { .. }
                | RegistryError::RateLimited { .. }
                | RegistryError::UnexpectedStatus { .. }
        )
    }
}
