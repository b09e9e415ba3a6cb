//! CKEditor CDN: `/ckeditor5/<version>/<build>/ckeditor.js`

use tracing::debug;

use crate::provider::types::{
    Rejected, Resolution, lookup_or_unpinned, repository, require_segments,
};
use crate::version::comparator::MatchMode;
use crate::version::source::VersionSourceKind;

const OWNER: &str = "ckeditor";
const LIBRARY: &str = "ckeditor5";
const BUILDS: &[&str] = &["classic", "inline", "balloon"];

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 4)?;

    if segments[1] != LIBRARY {
        debug!("Unsupported CKEditor CDN library {:?}", segments[1]);
        return Err(Rejected::UnknownLibrary(segments[1].to_string()));
    }

    if !BUILDS.contains(&segments[3]) {
        return Err(Rejected::UnsupportedLayout(format!(
            "unknown CKEditor build {:?}",
            segments[3]
        )));
    }

    Ok(lookup_or_unpinned(
        LIBRARY,
        Some(segments[2]),
        VersionSourceKind::RepoLatestRelease,
        repository(OWNER, LIBRARY),
        MatchMode::Exact,
    ))
}
