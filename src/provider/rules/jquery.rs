//! jQuery CDN: `/jquery-3.6.0.min.js`, `/ui/1.12.1/jquery-ui.min.js`,
//! `/color/jquery.color-2.1.2.min.js`, `/qunit/qunit-2.9.2.js`, `/pep/0.4.3/pep.js`

use tracing::debug;

use crate::provider::types::{
    Rejected, Resolution, lookup_or_unpinned, repository, require_segments,
};
use crate::version::comparator::MatchMode;
use crate::version::semver::extract_semver;
use crate::version::source::VersionSourceKind;

pub fn extract(segments: &[&str]) -> Result<Resolution, Rejected> {
    require_segments(segments, 2)?;

    let first = segments[1];
    let second = segments.get(2).copied();

    let (library, owner, name, version) = match first {
        _ if first.starts_with("jquery-migrate") => (
            "jquery-migrate",
            "jquery",
            "jquery-migrate",
            extract_semver(first),
        ),
        _ if first.starts_with("jquery") => ("jquery", "jquery", "jquery", extract_semver(first)),
        "ui" => ("jquery-ui", "jquery", "jquery-ui", second.and_then(extract_semver)),
        "mobile" => (
            "jquery-mobile",
            "jquery",
            "jquery-mobile",
            second.and_then(extract_semver),
        ),
        "color" => (
            "jquery-color",
            "jquery",
            "jquery-color",
            second.and_then(extract_semver),
        ),
        "qunit" => ("qunit", "qunitjs", "qunit", second.and_then(extract_semver)),
        "pep" => ("pep", "jquery", "PEP", second),
        _ => {
            debug!("Unsupported jQuery CDN library {:?}", first);
            return Err(Rejected::UnknownLibrary(first.to_string()));
        }
    };

    Ok(lookup_or_unpinned(
        library,
        version,
        VersionSourceKind::RepoTags,
        repository(owner, name),
        MatchMode::Exact,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::ExtractionResult;
    use rstest::rstest;

    fn extract_path(path: &str) -> Result<Resolution, Rejected> {
        let segments: Vec<&str> = path.split('/').collect();
        extract(&segments)
    }

    #[rstest]
    #[case("/jquery-3.6.0.min.js", "jquery", "3.6.0", ("jquery", "jquery"))]
    #[case("/jquery-3.6.0.slim.min.js", "jquery", "3.6.0", ("jquery", "jquery"))]
    #[case(
        "/jquery-migrate-3.4.1.min.js",
        "jquery-migrate",
        "3.4.1",
        ("jquery", "jquery-migrate")
    )]
    #[case("/ui/1.12.1/jquery-ui.min.js", "jquery-ui", "1.12.1", ("jquery", "jquery-ui"))]
    #[case(
        "/mobile/1.4.5/jquery.mobile-1.4.5.min.js",
        "jquery-mobile",
        "1.4.5",
        ("jquery", "jquery-mobile")
    )]
    #[case(
        "/color/jquery.color-2.1.2.min.js",
        "jquery-color",
        "2.1.2",
        ("jquery", "jquery-color")
    )]
    #[case("/qunit/qunit-2.9.2.js", "qunit", "2.9.2", ("qunitjs", "qunit"))]
    #[case("/pep/0.4.3/pep.js", "pep", "0.4.3", ("jquery", "PEP"))]
    fn extract_returns_expected_lookup(
        #[case] path: &str,
        #[case] library: &str,
        #[case] version: &str,
        #[case] repo: (&str, &str),
    ) {
        assert_eq!(
            extract_path(path),
            Ok(Resolution::Lookup(ExtractionResult {
                library_name: library.to_string(),
                claimed_version: version.to_string(),
                version_source: VersionSourceKind::RepoTags,
                query: repository(repo.0, repo.1),
                mode: MatchMode::Exact,
            }))
        );
    }

    #[rstest]
    #[case("/jquery-latest.min.js", "jquery")]
    #[case("/ui", "jquery-ui")]
    #[case("/qunit/qunit-git.js", "qunit")]
    fn extract_returns_unpinned_without_version(#[case] path: &str, #[case] library: &str) {
        assert_eq!(
            extract_path(path),
            Ok(Resolution::Unpinned {
                library_name: library.to_string()
            })
        );
    }

    #[test]
    fn extract_rejects_unknown_library() {
        assert_eq!(
            extract_path("/sizzle/2.3.0/sizzle.js"),
            Err(Rejected::UnknownLibrary("sizzle".to_string()))
        );
    }
}
