//! npm registry search implementation

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::source::{SourceQuery, VersionSource, VersionSourceKind, unsupported_query};
use crate::version::sources::{check_status, http_client};

/// Default base URL for npm registry
const DEFAULT_BASE_URL: &str = "https://registry.npmjs.org";

/// Minimum `searchScore` for a hit to be trusted; the registry scores
/// exact name matches above this, unrelated packages well below
pub const SEARCH_SCORE_THRESHOLD: f64 = 100_000.0;

/// Number of search hits requested
const SEARCH_SIZE: &str = "20";

/// Response from `/-/v1/search`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    objects: Vec<SearchObject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchObject {
    package: SearchPackage,
    #[serde(default)]
    search_score: f64,
}

#[derive(Debug, Deserialize)]
struct SearchPackage {
    name: String,
    version: String,
}

/// Version source backed by the npm registry search endpoint
pub struct NpmSearchSource {
    client: reqwest::Client,
    base_url: String,
}

impl NpmSearchSource {
    /// Creates a new NpmSearchSource with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for NpmSearchSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionSource for NpmSearchSource {
    fn kind(&self) -> VersionSourceKind {
        VersionSourceKind::PackageRegistryFuzzy
    }

    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError> {
        let SourceQuery::Package { name } = query else {
            return Err(unsupported_query(self.kind(), query));
        };

        let url = Url::parse_with_params(
            &format!("{}/-/v1/search", self.base_url),
            &[("text", name.as_str()), ("size", SEARCH_SIZE)],
        )
        .map_err(|e| RegistryError::InvalidRequest(e.to_string()))?;
        let url_str = url.to_string();

        let response = self.client.get(url).send().await?;
        let response = check_status(response, &url_str, name)?;

        let search: SearchResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse npm search response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        let hit = search
            .objects
            .into_iter()
            .find(|object| &object.package.name == name);

        match hit {
            Some(object) if object.search_score > SEARCH_SCORE_THRESHOLD => {
                Ok(object.package.version)
            }
            Some(object) => {
                debug!(
                    "Ignoring npm hit for {}: score {} is below threshold",
                    name, object.search_score
                );
                Err(RegistryError::NotFound(name.clone()))
            }
            None => Err(RegistryError::NotFound(name.clone())),
        }
    }
}
