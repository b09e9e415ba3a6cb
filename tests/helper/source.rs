//! Version source test utilities

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use cdn_updates::check::UpdateChecker;
use cdn_updates::config::{CheckerConfig, EndpointsConfig};
use cdn_updates::document::types::PendingReference;
use cdn_updates::document::{self};
use cdn_updates::version::error::RegistryError;
use cdn_updates::version::source::{SourceQuery, VersionSource, VersionSourceKind};

/// Fake source answering from a fixed table keyed by the query's display form
pub struct FakeSource {
    kind: VersionSourceKind,
    latest: HashMap<String, String>,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(kind: VersionSourceKind) -> Self {
        Self {
            kind,
            latest: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// `query` is `name` for packages and `owner/name` for repositories
    pub fn with_latest(mut self, query: &str, version: &str) -> Self {
        self.latest.insert(query.to_string(), version.to_string());
        self
    }

    /// Counter of `fetch_latest` calls, shared with the source
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl VersionSource for FakeSource {
    fn kind(&self) -> VersionSourceKind {
        self.kind
    }

    async fn fetch_latest(&self, query: &SourceQuery) -> Result<String, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = query.to_string();
        self.latest
            .get(&key)
            .cloned()
            .ok_or(RegistryError::NotFound(key))
    }
}

/// Create a checker whose sources are the given fakes
pub fn create_test_checker(sources: Vec<FakeSource>) -> UpdateChecker {
    let sources: HashMap<VersionSourceKind, Arc<dyn VersionSource>> = sources
        .into_iter()
        .map(|source| (source.kind(), Arc::new(source) as Arc<dyn VersionSource>))
        .collect();
    UpdateChecker::build(CheckerConfig::default(), sources)
}

/// Config pointing every upstream at the same mock server
pub fn config_for_server(url: &str) -> CheckerConfig {
    CheckerConfig {
        fetch_timeout_ms: 5_000,
        endpoints: EndpointsConfig {
            cdnjs: url.to_string(),
            github: url.to_string(),
            npm: url.to_string(),
            wordpress: url.to_string(),
        },
        ..Default::default()
    }
}

/// Scan a single-link document
pub fn pending_from(link: &str) -> PendingReference {
    let mut pending = document::scan(&format!(r#"<script src="{}"></script>"#, link));
    assert_eq!(pending.len(), 1, "expected exactly one reference in {link}");
    pending.remove(0)
}
