//! Version source implementations for fetching latest versions

pub mod cdnjs;
pub mod github;
pub mod npm;
pub mod wordpress;

pub use cdnjs::CdnjsSource;
pub use github::{GitHubReleaseSource, GitHubTagsSource};
pub use npm::NpmSearchSource;
pub use wordpress::WordPressTagsSource;

use reqwest::{Response, StatusCode};
use tracing::warn;

use crate::version::error::RegistryError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by every source
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}

/// Map non-success responses to registry errors
///
/// - 404 -> `NotFound`
/// - 429 -> `RateLimited` (honouring `retry-after`)
/// - any other non-2xx -> `UnexpectedStatus`, logged with URL and code
pub(crate) fn check_status(
    response: Response,
    url: &str,
    subject: &str,
) -> Result<Response, RegistryError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(RegistryError::NotFound(subject.to_string()));
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(RegistryError::RateLimited {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        warn!("{} returned status {}", url, status);
        return Err(RegistryError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
