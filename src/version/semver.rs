//! Semantic version helpers shared by provider rules and sources

use std::sync::LazyLock;

use regex::Regex;

/// `MAJOR.MINOR.PATCH` with an optional leading `v`, pre-release and build
/// metadata, searched anywhere inside a string.
static SEMVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"v?(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)(?:-[\da-z-]+(?:\.[\da-z-]+)*)?(?:\+[\da-z-]+(?:\.[\da-z-]+)*)?",
    )
    .expect("semver regex is valid")
});

/// File name parts that the pre-release grammar swallows in names like
/// `jquery-3.0.0-rc1.min.js`
const ASSET_SUFFIXES: &[&str] = &["min", "slim", "js", "mjs", "css", "map"];

/// Find the first semantic version inside `text`.
///
/// The leading `v` is dropped from the result.
///
/// Examples:
/// - "jquery-3.6.0.min.js" -> "3.6.0"
/// - "v2.1.0" -> "2.1.0"
/// - "jquery-3.0.0-rc1.min.js" -> "3.0.0-rc1"
/// - "master" -> None
pub fn extract_semver(text: &str) -> Option<&str> {
    let found = SEMVER_REGEX.find(text)?.as_str();
    let mut version = strip_v_prefix(found);

    while let Some((head, tail)) = version.rsplit_once('.')
        && ASSET_SUFFIXES.contains(&tail)
        && head.contains(['-', '+'])
    {
        version = head;
    }

    Some(version)
}

/// Strip a leading `v`/`V` when it is directly followed by a digit
pub fn strip_v_prefix(version: &str) -> &str {
    match version.strip_prefix(['v', 'V']) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => version,
    }
}
