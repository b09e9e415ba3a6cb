//! RawGit: `/<owner>/<repo>[/<tag-or-branch>/<file>]`

use crate::provider::types::{
    ExtractionResult, Rejected, Resolution, repository, require_segments,
};
use crate::version::comparator::MatchMode;
use crate::version::semver::extract_semver;
use crate::version::source::VersionSourceKind;

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 3)?;

    let owner = segments[1];
    let name = segments[2];
    if owner.is_empty() || name.is_empty() {
        return Err(Rejected::UnsupportedLayout(format!(
            "invalid repository {}/{}",
            owner, name
        )));
    }

    // A branch name (e.g. `master`) or no ref at all serves the newest commit
    let Some(version) = segments.get(3).copied().and_then(extract_semver) else {
        return Ok(Resolution::AlwaysLatest {
            library_name: name.to_string(),
        });
    };

    Ok(Resolution::Lookup(ExtractionResult {
        library_name: name.to_string(),
        claimed_version: version.to_string(),
        version_source: VersionSourceKind::RepoTags,
        query: repository(owner, name),
        mode: MatchMode::Exact,
    }))
}
