//! Document layer
//! - types.rs: Common types (SourceRegion, ReferenceUrl, PendingReference)
//! - links.rs: Link extraction from raw text
//! - filter.rs: URL parsing and known-provider filtering

pub mod filter;
pub mod links;
pub mod types;

pub use filter::{filter_references, parse_reference_url};
pub use links::find_links;
pub use types::{LinkMatch, PendingReference, ReferenceUrl, SourceRegion};

/// Extract every pending CDN reference from a document
pub fn scan(content: &str) -> Vec<PendingReference> {
    filter_references(find_links(content))
}
