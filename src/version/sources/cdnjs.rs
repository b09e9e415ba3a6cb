//! cdnjs library search API implementation

use reqwest::Url;
use serde::Deserialize;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::source::{SourceQuery, VersionSource, VersionSourceKind, unsupported_query};
use crate::version::sources::{check_status, http_client};

/// Default base URL for the cdnjs API
const DEFAULT_BASE_URL: &str = "https://api.cdnjs.com";

/// Response from `/libraries?search=...&fields=version`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    version: Option<String>,
}

/// Version source backed by the cdnjs library search
pub struct CdnjsSource {
    client: reqwest::Client,
    base_url: String,
}

impl CdnjsSource {
    /// Creates a new CdnjsSource with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CdnjsSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionSource for CdnjsSource {
    fn kind(&self) -> VersionSourceKind {
        VersionSourceKind::RegistrySearch
    }

    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError> {
        let SourceQuery::Package { name } = query else {
            return Err(unsupported_query(self.kind(), query));
        };

        let url = Url::parse_with_params(
            &format!("{}/libraries", self.base_url),
            &[("search", name.as_str()), ("fields", "version")],
        )
        .map_err(|e| RegistryError::InvalidRequest(e.to_string()))?;
        let url_str = url.to_string();

        let response = self.client.get(url).send().await?;
        let response = check_status(response, &url_str, name)?;

        let search: SearchResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse cdnjs search response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        // The search is fuzzy; only an exact name match counts
        search
            .results
            .into_iter()
            .find(|result| &result.name == name)
            .and_then(|result| result.version)
            .ok_or_else(|| RegistryError::NotFound(name.clone()))
    }
}
