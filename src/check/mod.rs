//! Check pipeline
//!
//! ```text
//! PendingReference -> provider::resolve -> VersionSource -> compare -> CdnReference
//! ```
//!
//! - checker.rs: UpdateChecker (batch orchestration, timeouts, bounded parallelism)
//! - types.rs: CdnReference and CheckSummary

pub mod checker;
pub mod types;

pub use checker::UpdateChecker;
pub use types::{CdnReference, CheckSummary};
