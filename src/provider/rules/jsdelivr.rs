//! jsDelivr sub-modes:
//! - `/npm/<name>@<version>/<file>` and `/npm/@<scope>/<name>@<version>/<file>`
//! - `/gh/<owner>/<repo>@<version>/<file>`
//! - `/wp/<plugin>/tags/<version>/<file>`

use tracing::debug;

use crate::provider::rules::split_versioned;
use crate::provider::types::{
    Rejected, Resolution, lookup_or_unpinned, repository, require_segments,
};
use crate::version::comparator::MatchMode;
use crate::version::source::{SourceQuery, VersionSourceKind};

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 3)?;

    match segments[1] {
        "npm" => extract_npm(segments),
        "gh" => extract_github(segments),
        "wp" => extract_wordpress(segments),
        other => {
            debug!("Unsupported jsDelivr mode {:?}", other);
            Err(Rejected::UnknownLibrary(other.to_string()))
        }
    }
}

fn extract_npm(segments: &[&str]) -> Result<Resolution, Rejected> {
    let combined = if segments[2].starts_with('@') {
        require_segments(segments, 4)?;
        format!("{}/{}", segments[2], segments[3])
    } else {
        segments[2].to_string()
    };

    let (name, version) = match split_versioned(&combined) {
        Some((name, version)) => (name, Some(version)),
        None => (combined.as_str(), None),
    };
    if name.is_empty() || name.ends_with('/') {
        return Err(Rejected::UnsupportedLayout(format!(
            "invalid npm package {:?}",
            combined
        )));
    }

    Ok(lookup_or_unpinned(
        name,
        version,
        VersionSourceKind::PackageRegistryFuzzy,
        SourceQuery::Package {
            name: name.to_string(),
        },
        MatchMode::Prefix,
    ))
}

fn extract_github(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 4)?;

    let owner = segments[2];
    let (name, version) = match split_versioned(segments[3]) {
        Some((name, version)) => (name, Some(version)),
        None => (segments[3], None),
    };
    if owner.is_empty() || name.is_empty() {
        return Err(Rejected::UnsupportedLayout(format!(
            "invalid repository {}/{}",
            owner, segments[3]
        )));
    }

    Ok(lookup_or_unpinned(
        name,
        version,
        VersionSourceKind::RepoTags,
        repository(owner, name),
        MatchMode::Prefix,
    ))
}

fn extract_wordpress(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 6)?;

    let slug = segments[2];
    if slug.is_empty() {
        return Err(Rejected::UnsupportedLayout("empty plugin name".to_string()));
    }

    Ok(lookup_or_unpinned(
        slug,
        Some(segments[4]),
        VersionSourceKind::ListingScrape,
        SourceQuery::Listing {
            slug: slug.to_string(),
        },
        MatchMode::Exact,
    ))
}
