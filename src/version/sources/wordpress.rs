//! WordPress plugin SVN tags listing implementation

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::version::error::RegistryError;
use crate::version::source::{SourceQuery, VersionSource, VersionSourceKind, unsupported_query};
use crate::version::sources::{check_status, http_client};

/// Default base URL for the plugin repository
const DEFAULT_BASE_URL: &str = "https://plugins.svn.wordpress.org";

/// `<li><a href="...">text</a></li>` entries of an SVN directory listing
static LISTING_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<li>\s*<a[^>]*>(.*?)</a>\s*</li>").expect("listing regex is valid")
});

/// Version source scraping the `tags/` directory listing of a plugin
pub struct WordPressTagsSource {
    client: reqwest::Client,
    base_url: String,
}

impl WordPressTagsSource {
    /// Creates a new WordPressTagsSource with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for WordPressTagsSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Last entry of a directory listing, without its trailing `/`
fn last_listing_entry(html: &str) -> Option<String> {
    LISTING_ENTRY_REGEX
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|text| text.as_str().trim().trim_end_matches('/'))
        .filter(|entry| !entry.is_empty() && *entry != "..")
        .last()
        .map(str::to_string)
}

#[async_trait::async_trait]
impl VersionSource for WordPressTagsSource {
    fn kind(&self) -> VersionSourceKind {
        VersionSourceKind::ListingScrape
    }

    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError> {
        let SourceQuery::Listing { slug } = query else {
            return Err(unsupported_query(self.kind(), query));
        };

        let url = format!("{}/{}/tags/", self.base_url, slug);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, &url, slug)?;

        let html = response.text().await.map_err(|e| {
            warn!("Failed to read listing {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        last_listing_entry(&html).ok_or_else(|| RegistryError::NoVersions(slug.clone()))
    }
}
