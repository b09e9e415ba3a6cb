//! Link extraction from free-form documents

use std::sync::LazyLock;

use regex::Regex;

use crate::document::types::{LinkMatch, SourceRegion};

/// Absolute (`https://host/...`) and network-path (`//host/...`) references.
/// The host must contain at least one dot; the path stops at whitespace,
/// quotes, angle brackets, backticks and closing parentheses.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:https?:)?//[\p{L}\p{N}-]+(?:\.[\p{L}\p{N}-]+)+(?::\d{2,5})?(?:[/?#][^\s"'<>`)]*)?"#,
    )
    .expect("link regex is valid")
});

/// Characters that commonly end a sentence right after a link
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Find every URL-looking substring in `content`, in document order
pub fn find_links(content: &str) -> Vec<LinkMatch> {
    let line_starts = line_starts(content);

    LINK_REGEX
        .find_iter(content)
        .filter_map(|m| {
            let text = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if text.is_empty() {
                return None;
            }

            let start = m.start();
            let line = line_starts.partition_point(|&offset| offset <= start) - 1;
            let column = content[line_starts[line]..start].chars().count();

            Some(LinkMatch {
                text: text.to_string(),
                region: SourceRegion {
                    start,
                    end: start + text.len(),
                    line,
                    column,
                },
            })
        })
        .collect()
}

fn line_starts(content: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}
