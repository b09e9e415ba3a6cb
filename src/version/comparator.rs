//! Version comparison for CDN references

use serde::{Deserialize, Serialize};

use crate::version::semver::strip_v_prefix;

/// How a claimed version is compared to the latest upstream version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Full equality, tolerating metadata suffixes on the upstream side
    Exact,
    /// Partial pins: `3` matches `3.2.1`
    Prefix,
}

/// Terminal status of a checked reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStatus {
    /// Claimed version is the latest one
    UpToDate,
    /// A newer version exists, or the reference pins no version at all
    ToUpdate,
    /// The library or its latest version could not be determined
    NotFound,
}

impl ReferenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceStatus::UpToDate => "up_to_date",
            ReferenceStatus::ToUpdate => "to_update",
            ReferenceStatus::NotFound => "not_found",
        }
    }
}

/// Compare a claimed version to the latest upstream version.
///
/// A leading `v` is ignored on both sides.
pub fn compare(claimed: &str, latest: &str, mode: MatchMode) -> ReferenceStatus {
    let claimed = strip_v_prefix(claimed);
    let latest = strip_v_prefix(latest);

    let matches = match mode {
        MatchMode::Exact => claimed == latest || starts_with_ignore_case(latest, claimed),
        MatchMode::Prefix => starts_with_ignore_case(latest, claimed),
    };

    if matches {
        ReferenceStatus::UpToDate
    } else {
        ReferenceStatus::ToUpdate
    }
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
