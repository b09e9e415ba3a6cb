//! Common types for the document layer

use serde::Serialize;

/// Location of a link inside the checked document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceRegion {
    /// Byte offset of the first character of the link
    pub start: usize,
    /// Byte offset one past the last character of the link
    pub end: usize,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in characters (0-indexed)
    pub column: usize,
}

/// A link found in a document, before any URL parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub text: String,
    pub region: SourceRegion,
}

/// The parts of a URL the provider rules care about
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceUrl {
    pub scheme: String,
    /// Lowercased host name, without port
    pub host: String,
    /// Path, always starting with `/`
    pub path: String,
    pub query: Option<String>,
}

impl ReferenceUrl {
    /// Splits the path on `/`. Index 0 is always the empty string.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').collect()
    }

    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }
}

impl std::fmt::Display for ReferenceUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

/// A link whose host belongs to a known CDN provider, waiting to be checked
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingReference {
    pub region: SourceRegion,
    pub url: ReferenceUrl,
}
