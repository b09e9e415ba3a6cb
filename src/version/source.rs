//! Version source trait for fetching the latest version of a library

#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::version::error::RegistryError;

/// Kind of upstream queried for the latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSourceKind {
    /// cdnjs library search API
    RegistrySearch,
    /// GitHub repository tags
    RepoTags,
    /// GitHub repository latest release
    RepoLatestRelease,
    /// npm registry search, guarded by a search score threshold
    PackageRegistryFuzzy,
    /// WordPress plugin SVN tags listing page
    ListingScrape,
}

impl VersionSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionSourceKind::RegistrySearch => "registry_search",
            VersionSourceKind::RepoTags => "repo_tags",
            VersionSourceKind::RepoLatestRelease => "repo_latest_release",
            VersionSourceKind::PackageRegistryFuzzy => "package_registry_fuzzy",
            VersionSourceKind::ListingScrape => "listing_scrape",
        }
    }
}

/// What a version source is asked about
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceQuery {
    /// A package known by name to a registry (cdnjs, npm)
    Package { name: String },
    /// A source repository (`owner/name` on GitHub)
    Repository { owner: String, name: String },
    /// A directory listing identified by a slug (WordPress plugin)
    Listing { slug: String },
}

impl std::fmt::Display for SourceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceQuery::Package { name } => write!(f, "{}", name),
            SourceQuery::Repository { owner, name } => write!(f, "{}/{}", owner, name),
            SourceQuery::Listing { slug } => write!(f, "{}", slug),
        }
    }
}

/// Trait for fetching the latest version from an upstream
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Returns the kind of upstream this implementation queries
    fn kind(&self) -> VersionSourceKind;

    /// Fetches the latest version for the queried library
    ///
    /// # Returns
    /// * `Ok(String)` - The latest version, without a leading `v`
    /// * `Err(RegistryError)` - If the upstream could not answer or knows no version
    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError>;
}

/// Rejects queries a source does not understand
pub(crate) fn unsupported_query(kind: VersionSourceKind, query: &SourceQuery) -> RegistryError {
    RegistryError::InvalidRequest(format!(
        "{} cannot answer query {:?}",
        kind.as_str(),
        query
    ))
}
