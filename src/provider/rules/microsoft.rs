//! Microsoft Ajax CDN:
//! - `/ajax/<key>/<version>/<file>` (version is the literal segment)
//! - `/ajax/<key>/<file-with-version>` (version is searched in the file name)

use tracing::debug;

use crate::provider::correspondences::{MICROSOFT_AJAX, lookup};
use crate::provider::rules::match_mode;
use crate::provider::types::{
    Rejected, Resolution, lookup_or_unpinned, repository, require_segments,
};
use crate::version::semver::extract_semver;
use crate::version::source::VersionSourceKind;

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 4)?;

    let key = segments[2];
    let Some(repo) = lookup(MICROSOFT_AJAX, key) else {
        debug!("No correspondence for Microsoft Ajax library {:?}", key);
        return Err(Rejected::UnknownLibrary(key.to_string()));
    };

    let version = if segments.len() == 5 {
        Some(segments[3])
    } else {
        extract_semver(segments[3])
    };

    Ok(lookup_or_unpinned(
        key,
        version,
        VersionSourceKind::RepoTags,
        repository(repo.owner, repo.name),
        match_mode(repo.fuzzy),
    ))
}
