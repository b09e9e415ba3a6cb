//! cdnjs: `/ajax/libs/<name>/<version>/<file>`

use crate::provider::types::{Rejected, Resolution, lookup_or_unpinned, require_segments};
use crate::version::comparator::MatchMode;
use crate::version::source::{SourceQuery, VersionSourceKind};

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 5)?;

    let name = segments[3];
    if name.is_empty() {
        return Err(Rejected::UnsupportedLayout("empty library name".to_string()));
    }

    Ok(lookup_or_unpinned(
        name,
        Some(segments[4]),
        VersionSourceKind::RegistrySearch,
        SourceQuery::Package {
            name: name.to_string(),
        },
        MatchMode::Exact,
    ))
}
