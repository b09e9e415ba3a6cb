//! Types produced by provider rules

use crate::version::comparator::MatchMode;
use crate::version::source::{SourceQuery, VersionSourceKind};

/// Library, claimed version and the upstream to ask about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub library_name: String,
    pub claimed_version: String,
    pub version_source: VersionSourceKind,
    pub query: SourceQuery,
    pub mode: MatchMode,
}

/// Outcome of applying a provider rule to a URL path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A version was found; the upstream must be queried
    Lookup(ExtractionResult),
    /// The reference pins no version
    Unpinned { library_name: String },
    /// The provider serves the newest build, or the path names a branch
    AlwaysLatest { library_name: String },
}

impl Resolution {
    pub fn library_name(&self) -> &str {
        match self {
            Resolution::Lookup(result) => &result.library_name,
            Resolution::Unpinned { library_name } | Resolution::AlwaysLatest { library_name } => {
                library_name
            }
        }
    }
}

/// Why a provider rule refused a path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("path has {found} segments, at least {expected} required")]
    TooFewSegments { expected: usize, found: usize },

    #[error("unknown library: {0}")]
    UnknownLibrary(String),

    #[error("unsupported layout: {0}")]
    UnsupportedLayout(String),
}

/// Ensure the path has at least `expected` segments (including the leading empty one)
pub(crate) fn require_segments(segments: &[&str], expected: usize) -> Result<(), Rejected> {
    if segments.len() < expected {
        return Err(Rejected::TooFewSegments {
            expected,
            found: segments.len(),
        });
    }
    Ok(())
}

/// Build a `Lookup`, or `Unpinned` when the version is missing or empty
pub(crate) fn lookup_or_unpinned(
    library_name: impl Into<String>,
    claimed_version: Option<&str>,
    version_source: VersionSourceKind,
    query: SourceQuery,
    mode: MatchMode,
) -> Resolution {
    let library_name = library_name.into();
    match claimed_version.filter(|v| !v.is_empty()) {
        Some(version) => Resolution::Lookup(ExtractionResult {
            library_name,
            claimed_version: version.to_string(),
            version_source,
            query,
            mode,
        }),
        None => Resolution::Unpinned { library_name },
    }
}

/// Repository query for `owner/name`
pub(crate) fn repository(owner: &str, name: &str) -> SourceQuery {
    SourceQuery::Repository {
        owner: owner.to_string(),
        name: name.to_string(),
    }
}
