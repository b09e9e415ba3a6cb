//! Result types of a check run

use serde::Serialize;

use crate::document::types::{PendingReference, ReferenceUrl, SourceRegion};
use crate::version::comparator::ReferenceStatus;

/// A CDN reference with its terminal status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CdnReference {
    pub region: SourceRegion,
    pub url: ReferenceUrl,
    pub library_name: Option<String>,
    pub claimed_version: Option<String>,
    /// Only set when an upstream answered
    pub latest_version: Option<String>,
    pub status: ReferenceStatus,
}

impl CdnReference {
    /// A reference settled without asking any upstream
    pub fn settled(
        pending: &PendingReference,
        library_name: Option<String>,
        claimed_version: Option<String>,
        status: ReferenceStatus,
    ) -> Self {
        Self {
            region: pending.region,
            url: pending.url.clone(),
            library_name,
            claimed_version,
            latest_version: None,
            status,
        }
    }

    /// A reference that could not be resolved at all
    pub fn not_found(pending: &PendingReference) -> Self {
        Self::settled(pending, None, None, ReferenceStatus::NotFound)
    }
}

/// Number of references per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub up_to_date: usize,
    pub to_update: usize,
    pub not_found: usize,
}

impl CheckSummary {
    pub fn from_references<'a>(references: impl IntoIterator<Item = &'a CdnReference>) -> Self {
        references
            .into_iter()
            .fold(Self::default(), |mut summary, reference| {
                match reference.status {
                    ReferenceStatus::UpToDate => summary.up_to_date += 1,
                    ReferenceStatus::ToUpdate => summary.to_update += 1,
                    ReferenceStatus::NotFound => summary.not_found += 1,
                }
                summary
            })
    }

    /// Whether every reference is up to date
    pub fn all_up_to_date(&self) -> bool {
        self.to_update == 0 && self.not_found == 0
    }
}
