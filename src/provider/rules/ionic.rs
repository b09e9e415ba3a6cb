//! Ionic CDN: `/<name>/<version>/<file>`, released from the `ionic-team` organisation

use crate::provider::types::{
    Rejected, Resolution, lookup_or_unpinned, repository, require_segments,
};
use crate::version::comparator::MatchMode;
use crate::version::source::VersionSourceKind;

const OWNER: &str = "ionic-team";

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 3)?;

    let name = segments[1];
    if name.is_empty() {
        return Err(Rejected::UnsupportedLayout("empty library name".to_string()));
    }

    Ok(lookup_or_unpinned(
        name,
        Some(segments[2]),
        VersionSourceKind::RepoLatestRelease,
        repository(OWNER, name),
        MatchMode::Exact,
    ))
}
