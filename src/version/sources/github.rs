//! GitHub tags and releases API implementations

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::semver::strip_v_prefix;
use crate::version::source::{SourceQuery, VersionSource, VersionSourceKind, unsupported_query};
use crate::version::sources::{check_status, http_client};

/// Default base URL for GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Entry of `GET /repos/{owner}/{repo}/tags`
#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

/// Response from `GET /repos/{owner}/{repo}/releases/latest`
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Authenticated access to the GitHub REST API
struct GitHubApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubApi {
    fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        repository: &str,
    ) -> Result<T, RegistryError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;
        let response = check_status(response, &url, repository)?;

        response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub response from {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

fn repository(kind: VersionSourceKind, query: &SourceQuery) -> Result<String, RegistryError> {
    match query {
        SourceQuery::Repository { owner, name } => Ok(format!("{}/{}", owner, name)),
        _ => Err(unsupported_query(kind, query)),
    }
}

/// Version source reading the most recent tag of a repository
pub struct GitHubTagsSource {
    api: GitHubApi,
}

impl GitHubTagsSource {
    /// Creates a new GitHubTagsSource with a custom base URL and optional token
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            api: GitHubApi::new(base_url, token),
        }
    }
}

impl Default for GitHubTagsSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[async_trait::async_trait]
impl VersionSource for GitHubTagsSource {
    fn kind(&self) -> VersionSourceKind {
        VersionSourceKind::RepoTags
    }

    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError> {
        let repository = repository(self.kind(), query)?;
        let tags: Vec<Tag> = self
            .api
            .get_json(&format!("/repos/{}/tags", repository), &repository)
            .await?;

        // GitHub lists the most recent tag first
        let Some(first) = tags.into_iter().next() else {
            debug!("Repository {} has no tags", repository);
            return Err(RegistryError::NoVersions(repository));
        };

        Ok(strip_v_prefix(&first.name).to_string())
    }
}

/// Version source reading the latest published release of a repository
pub struct GitHubReleaseSource {
    api: GitHubApi,
}

impl GitHubReleaseSource {
    /// Creates a new GitHubReleaseSource with a custom base URL and optional token
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            api: GitHubApi::new(base_url, token),
        }
    }
}

impl Default for GitHubReleaseSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[async_trait::async_trait]
impl VersionSource for GitHubReleaseSource {
    fn kind(&self) -> VersionSourceKind {
        VersionSourceKind::RepoLatestRelease
    }

    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError> {
        let repository = repository(self.kind(), query)?;
        let release: Release = self
            .api
            .get_json(&format!("/repos/{}/releases/latest", repository), &repository)
            .await?;

        Ok(strip_v_prefix(&release.tag_name).to_string())
    }
}
