//! Providers whose path is `.../<key>/<version>/...` with the key looked up
//! in a correspondence table (BootstrapCDN, Google Hosted Libraries, KeyCDN,
//! Staticfile CDN)

use tracing::debug;

use crate::provider::correspondences::{CorrespondenceTable, lookup};
use crate::provider::rules::match_mode;
use crate::provider::types::{
    Rejected, Resolution, lookup_or_unpinned, repository, require_segments,
};
use crate::version::source::VersionSourceKind;

pub fn extract(
    segments: &[&str],
    table: CorrespondenceTable,
    key_index: usize,
    version_index: usize,
) -> Result<Resolution, Rejected> {
    require_segments(segments, key_index.max(version_index) + 1)?;

    let key = segments[key_index];
    let Some(repo) = lookup(table, key) else {
        debug!("No correspondence for library key {:?}", key);
        return Err(Rejected::UnknownLibrary(key.to_string()));
    };

    Ok(lookup_or_unpinned(
        key,
        Some(segments[version_index]),
        VersionSourceKind::RepoTags,
        repository(repo.owner, repo.name),
        match_mode(repo.fuzzy),
    ))
}
