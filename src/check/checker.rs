//! Resolve, fetch and compare pipeline for CDN references

use std::collections::HashMap;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::check::types::{CdnReference, CheckSummary};
use crate::config::{CheckerConfig, UnpinnedPolicy};
use crate::document::types::PendingReference;
use crate::provider::{self, ExtractionResult, Resolution};
use crate::version::comparator::{ReferenceStatus, compare};
use crate::version::error::RegistryError;
use crate::version::source::{VersionSource, VersionSourceKind};
use crate::version::sources::{
    CdnjsSource, GitHubReleaseSource, GitHubTagsSource, NpmSearchSource, WordPressTagsSource,
};

/// Checks CDN references against their upstreams.
///
/// Holds one version source per [`VersionSourceKind`] and the immutable
/// configuration of the run. References are independent: a failure on one
/// ends as `NotFound` on that reference only.
pub struct UpdateChecker {
    config: CheckerConfig,
    sources: HashMap<VersionSourceKind, Arc<dyn VersionSource>>,
}

impl UpdateChecker {
    /// Create a checker talking to the upstreams named in `config`
    pub fn new(config: CheckerConfig) -> Self {
        let sources = Self::initialize_sources(&config);
        Self { config, sources }
    }

    /// Build a checker with custom sources
    pub fn build(
        config: CheckerConfig,
        sources: HashMap<VersionSourceKind, Arc<dyn VersionSource>>,
    ) -> Self {
        Self { config, sources }
    }

    fn initialize_sources(
        config: &CheckerConfig,
    ) -> HashMap<VersionSourceKind, Arc<dyn VersionSource>> {
        let endpoints = &config.endpoints;
        let token = config.github_token.clone();

        let mut sources: HashMap<VersionSourceKind, Arc<dyn VersionSource>> = HashMap::new();
        sources.insert(
            VersionSourceKind::RegistrySearch,
            Arc::new(CdnjsSource::new(&endpoints.cdnjs)),
        );
        sources.insert(
            VersionSourceKind::RepoTags,
            Arc::new(GitHubTagsSource::new(&endpoints.github, token.clone())),
        );
        sources.insert(
            VersionSourceKind::RepoLatestRelease,
            Arc::new(GitHubReleaseSource::new(&endpoints.github, token)),
        );
        sources.insert(
            VersionSourceKind::PackageRegistryFuzzy,
            Arc::new(NpmSearchSource::new(&endpoints.npm)),
        );
        sources.insert(
            VersionSourceKind::ListingScrape,
            Arc::new(WordPressTagsSource::new(&endpoints.wordpress)),
        );
        sources
    }

    /// Check a batch of references.
    ///
    /// Upstream requests run concurrently, bounded by
    /// `max_concurrent_fetches`. Results keep the input order.
    pub async fn check_all(&self, pending: &[PendingReference]) -> Vec<CdnReference> {
        info!("Checking {} CDN references", pending.len());

        let references: Vec<CdnReference> = stream::iter(pending)
            .map(|reference| self.check_reference(reference))
            .buffered(self.config.max_concurrent_fetches.max(1))
            .collect()
            .await;

        let summary = CheckSummary::from_references(&references);
        info!(
            "Check finished: {} up to date, {} to update, {} not found",
            summary.up_to_date, summary.to_update, summary.not_found
        );

        references
    }

    /// Check one reference. Never fails: every error becomes `NotFound`.
    pub async fn check_reference(&self, pending: &PendingReference) -> CdnReference {
        let resolution = match provider::resolve(&pending.url) {
            Ok(resolution) => resolution,
            Err(rejected) => {
                debug!("Cannot resolve {}: {}", pending.url, rejected);
                return CdnReference::not_found(pending);
            }
        };
        debug!("{} references {}", pending.url, resolution.library_name());

        match resolution {
            Resolution::AlwaysLatest { library_name } => CdnReference::settled(
                pending,
                Some(library_name),
                None,
                ReferenceStatus::UpToDate,
            ),
            Resolution::Unpinned { library_name } => {
                debug!("{} pins no version of {}", pending.url, library_name);
                let status = match self.config.unpinned_policy {
                    UnpinnedPolicy::ToUpdate => ReferenceStatus::ToUpdate,
                    UnpinnedPolicy::NotFound => ReferenceStatus::NotFound,
                };
                CdnReference::settled(pending, Some(library_name), None, status)
            }
            Resolution::Lookup(extraction) => self.lookup(pending, extraction).await,
        }
    }

    async fn lookup(&self, pending: &PendingReference, extraction: ExtractionResult) -> CdnReference {
        let ExtractionResult {
            library_name,
            claimed_version,
            version_source,
            query,
            mode,
        } = extraction;

        let Some(source) = self.sources.get(&version_source) else {
            warn!("No {} source configured for {}", version_source.as_str(), pending.url);
            return CdnReference::settled(
                pending,
                Some(library_name),
                Some(claimed_version),
                ReferenceStatus::NotFound,
            );
        };

        let fetched = timeout(self.config.fetch_timeout(), source.fetch_latest(&query))
            .await
            .unwrap_or(Err(RegistryError::Timeout {
                timeout_ms: self.config.fetch_timeout_ms,
            }));

        match fetched {
            Ok(latest) => {
                let status = compare(&claimed_version, &latest, mode);
                debug!(
                    "{}: claimed {}, latest {} -> {}",
                    library_name,
                    claimed_version,
                    latest,
                    status.as_str()
                );
                CdnReference {
                    region: pending.region,
                    url: pending.url.clone(),
                    library_name: Some(library_name),
                    claimed_version: Some(claimed_version),
                    latest_version: Some(latest),
                    status,
                }
            }
            Err(e) => {
                if e.is_transport() {
                    warn!("An error occurred for \"{}\" ({}): {}", pending.url, query, e);
                } else {
                    debug!("No latest version for \"{}\" ({}): {}", pending.url, query, e);
                }
                CdnReference::settled(
                    pending,
                    Some(library_name),
                    Some(claimed_version),
                    ReferenceStatus::NotFound,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::types::{ReferenceUrl, SourceRegion};
    use crate::version::source::{MockVersionSource, SourceQuery};
    use std::time::Duration;

    fn pending(host: &str, path: &str) -> PendingReference {
        PendingReference {
            region: SourceRegion {
                start: 0,
                end: 0,
                line: 0,
                column: 0,
            },
            url: ReferenceUrl {
                scheme: "https".to_string(),
                host: host.to_string(),
                path: path.to_string(),
                query: None,
            },
        }
    }

    fn checker_with(kind: VersionSourceKind, source: MockVersionSource) -> UpdateChecker {
        let sources: HashMap<VersionSourceKind, Arc<dyn VersionSource>> =
            HashMap::from([(kind, Arc::new(source) as Arc<dyn VersionSource>)]);
        UpdateChecker::build(CheckerConfig::default(), sources)
    }

    #[tokio::test]
    async fn check_reference_reports_up_to_date_version() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch_latest()
            .withf(|query| matches!(query, SourceQuery::Package { name } if name == "jquery"))
            .times(1)
            .returning(|_| Ok("3.6.0".to_string()));
        let checker = checker_with(VersionSourceKind::RegistrySearch, source);

        let result = checker
            .check_reference(&pending(
                "cdnjs.cloudflare.com",
                "/ajax/libs/jquery/3.6.0/jquery.min.js",
            ))
            .await;

        assert_eq!(result.status, ReferenceStatus::UpToDate);
        assert_eq!(result.latest_version.as_deref(), Some("3.6.0"));
        assert_eq!(result.library_name.as_deref(), Some("jquery"));
    }

    #[tokio::test]
    async fn check_reference_reports_outdated_version() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch_latest()
            .times(1)
            .returning(|_| Ok("3.6.0".to_string()));
        let checker = checker_with(VersionSourceKind::RegistrySearch, source);

        let result = checker
            .check_reference(&pending(
                "cdnjs.cloudflare.com",
                "/ajax/libs/jquery/3.5.0/jquery.min.js",
            ))
            .await;

        assert_eq!(result.status, ReferenceStatus::ToUpdate);
        assert_eq!(result.claimed_version.as_deref(), Some("3.5.0"));
        assert_eq!(result.latest_version.as_deref(), Some("3.6.0"));
    }

    #[tokio::test]
    async fn check_reference_maps_source_errors_to_not_found() {
        let mut source = MockVersionSource::new();
        source.expect_fetch_latest().times(1).returning(|_| {
            Err(RegistryError::UnexpectedStatus {
                url: "https://api.github.com/repos/twbs/bootstrap/tags".to_string(),
                status: 403,
            })
        });
        let checker = checker_with(VersionSourceKind::RepoTags, source);

        let result = checker
            .check_reference(&pending(
                "maxcdn.bootstrapcdn.com",
                "/bootstrap/4.0.0/css/bootstrap.min.css",
            ))
            .await;

        assert_eq!(result.status, ReferenceStatus::NotFound);
        assert_eq!(result.latest_version, None);
    }

    #[tokio::test]
    async fn check_reference_skips_network_for_unknown_library() {
        let mut source = MockVersionSource::new();
        source.expect_fetch_latest().times(0);
        let checker = checker_with(VersionSourceKind::RepoTags, source);

        let result = checker
            .check_reference(&pending(
                "opensource.keycdn.com",
                "/ajax/libs/bootstrap/4.3.1/css/bootstrap.min.css",
            ))
            .await;

        assert_eq!(result.status, ReferenceStatus::NotFound);
        assert_eq!(result.library_name, None);
    }

    #[tokio::test]
    async fn check_reference_applies_unpinned_policy() {
        let mut source = MockVersionSource::new();
        source.expect_fetch_latest().times(0);
        let reference = pending("cdn.jsdelivr.net", "/npm/vue/dist/vue.js");

        let checker = checker_with(VersionSourceKind::PackageRegistryFuzzy, source);
        let result = checker.check_reference(&reference).await;
        assert_eq!(result.status, ReferenceStatus::ToUpdate);
        assert_eq!(result.latest_version, None);

        let config = CheckerConfig {
            unpinned_policy: UnpinnedPolicy::NotFound,
            ..Default::default()
        };
        let checker = UpdateChecker::build(config, HashMap::new());
        let result = checker.check_reference(&reference).await;
        assert_eq!(result.status, ReferenceStatus::NotFound);
    }

    #[tokio::test]
    async fn check_reference_reports_always_latest_providers_as_up_to_date() {
        let checker = UpdateChecker::build(CheckerConfig::default(), HashMap::new());

        let result = checker
            .check_reference(&pending("use.fontawesome.com", "/1a2b3c4d5e.js"))
            .await;

        assert_eq!(result.status, ReferenceStatus::UpToDate);
        assert_eq!(result.library_name.as_deref(), Some("font-awesome"));
    }

    #[tokio::test]
    async fn check_reference_returns_not_found_without_matching_source() {
        let checker = UpdateChecker::build(CheckerConfig::default(), HashMap::new());

        let result = checker
            .check_reference(&pending("cdn.jsdelivr.net", "/npm/lodash@4"))
            .await;

        assert_eq!(result.status, ReferenceStatus::NotFound);
        assert_eq!(result.claimed_version.as_deref(), Some("4"));
    }

    struct HangingSource;

    #[async_trait::async_trait]
    impl VersionSource for HangingSource {
        fn kind(&self) -> VersionSourceKind {
            VersionSourceKind::RepoTags
        }

        async fn fetch_latest(&self, _query: &SourceQuery) -> Result<String, RegistryError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("never".to_string())
        }
    }

    #[tokio::test]
    async fn check_reference_times_out_hanging_source() {
        let config = CheckerConfig {
            fetch_timeout_ms: 50,
            ..Default::default()
        };
        let sources: HashMap<VersionSourceKind, Arc<dyn VersionSource>> =
            HashMap::from([(
                VersionSourceKind::RepoTags,
                Arc::new(HangingSource) as Arc<dyn VersionSource>,
            )]);
        let checker = UpdateChecker::build(config, sources);

        let result = checker
            .check_reference(&pending("cdn.staticfile.org", "/vue/2.5.16/vue.min.js"))
            .await;

        assert_eq!(result.status, ReferenceStatus::NotFound);
    }

    #[tokio::test]
    async fn check_all_continues_after_failures_and_keeps_order() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch_latest()
            .withf(|query| matches!(query, SourceQuery::Repository { name, .. } if name == "react"))
            .times(1)
            .returning(|_| {
                Err(RegistryError::UnexpectedStatus {
                    url: "https://api.github.com/repos/facebook/react/tags".to_string(),
                    status: 403,
                })
            });
        source
            .expect_fetch_latest()
            .withf(|query| matches!(query, SourceQuery::Repository { name, .. } if name == "vue"))
            .times(1)
            .returning(|_| Ok("2.5.16".to_string()));
        let checker = checker_with(VersionSourceKind::RepoTags, source);

        let batch = vec![
            pending("cdn.staticfile.org", "/react/16.4.0/umd/react.production.min.js"),
            pending("cdn.staticfile.org", "/vue/2.5.16/vue.min.js"),
            pending("use.fontawesome.com", "/kit.js"),
        ];

        let results = checker.check_all(&batch).await;

        let statuses: Vec<ReferenceStatus> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                ReferenceStatus::NotFound,
                ReferenceStatus::UpToDate,
                ReferenceStatus::UpToDate
            ]
        );
    }

    #[tokio::test]
    async fn check_all_is_idempotent() {
        let mut source = MockVersionSource::new();
        source
            .expect_fetch_latest()
            .times(2)
            .returning(|_| Ok("4.17.21".to_string()));
        let checker = checker_with(VersionSourceKind::PackageRegistryFuzzy, source);
        let batch = vec![pending("cdn.jsdelivr.net", "/npm/lodash@4")];

        let first = checker.check_all(&batch).await;
        let second = checker.check_all(&batch).await;

        assert_eq!(first, second);
        assert_eq!(first[0].status, ReferenceStatus::UpToDate);
    }
}
