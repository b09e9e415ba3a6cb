//! Per-provider path grammars
//!
//! Every rule receives the URL path split on `/` (index 0 is empty) and
//! either resolves it or rejects it. Rules never panic on short or odd paths.

pub mod cdnjs;
pub mod ckeditor;
pub mod ionic;
pub mod jquery;
pub mod jsdelivr;
pub mod keyed;
pub mod microsoft;
pub mod rawgit;

use crate::version::comparator::MatchMode;

fn match_mode(fuzzy: bool) -> MatchMode {
    if fuzzy {
        MatchMode::Prefix
    } else {
        MatchMode::Exact
    }
}

/// Split a `name@version` segment on its last `@`.
///
/// A leading `@` belongs to the name (npm scopes). Returns None when the
/// segment carries no version.
fn split_versioned(segment: &str) -> Option<(&str, &str)> {
    let scope_offset = usize::from(segment.starts_with('@'));
    let (name, version) = segment[scope_offset..].rsplit_once('@')?;
    Some((&segment[..scope_offset + name.len()], version))
}
