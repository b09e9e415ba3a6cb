//! Version layer: fetching and comparing library versions
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │  VersionSource   │────▶│    Comparator    │
//! │ (fetch latest)   │     │ (exact / prefix) │
//! └──────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────────────┐
//! │ Sources: cdnjs, GitHub tags/releases │
//! │ npm search, WordPress tags listing   │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: VersionSource trait and the query types it answers
//! - [`sources`]: Concrete upstream implementations
//! - [`comparator`]: Claimed-vs-latest comparison and reference status
//! - [`semver`]: Semantic version extraction helpers
//! - [`error`]: Error type for upstream operations

pub mod comparator;
pub mod error;
pub mod semver;
pub mod source;
pub mod sources;
