//! Keeps the links that point at a known CDN provider

use reqwest::Url;
use tracing::debug;

use crate::document::types::{LinkMatch, PendingReference, ReferenceUrl};
use crate::provider::Provider;

/// Parse a raw link into its URL parts.
///
/// Network-path references (`//host/path`) are parsed as HTTPS.
/// Returns None for anything that is not an http(s) URL with a host.
pub fn parse_reference_url(text: &str) -> Option<ReferenceUrl> {
    let parsed = if text.starts_with("//") {
        Url::parse(&format!("https:{}", text))
    } else {
        Url::parse(text)
    };

    let url = parsed
        .inspect_err(|e| debug!("Skipping unparsable link {:?}: {}", text, e))
        .ok()?;

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    Some(ReferenceUrl {
        scheme: url.scheme().to_string(),
        host: url.host_str()?.to_ascii_lowercase(),
        path: url.path().to_string(),
        query: url.query().map(str::to_string),
    })
}

/// Turn extracted links into pending references, dropping unknown hosts
pub fn filter_references(links: Vec<LinkMatch>) -> Vec<PendingReference> {
    links
        .into_iter()
        .filter_map(|link| {
            let url = parse_reference_url(&link.text)?;

            if Provider::detect(&url.host).is_none() {
                debug!("\"{}\" has been detected, but won't be handled", url.host);
                return None;
            }

            Some(PendingReference {
                region: link.region,
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::types::SourceRegion;
    use rstest::rstest;

    fn link(text: &str) -> LinkMatch {
        LinkMatch {
            text: text.to_string(),
            region: SourceRegion {
                start: 0,
                end: text.len(),
                line: 0,
                column: 0,
            },
        }
    }

    #[rstest]
    #[case(
        "https://cdnjs.cloudflare.com/ajax/libs/jquery/3.6.0/jquery.min.js",
        "https",
        "cdnjs.cloudflare.com",
        "/ajax/libs/jquery/3.6.0/jquery.min.js"
    )]
    #[case(
        "//cdn.jsdelivr.net/npm/lodash@4",
        "https",
        "cdn.jsdelivr.net",
        "/npm/lodash@4"
    )]
    #[case("http://CODE.JQUERY.COM/jquery-3.6.0.js", "http", "code.jquery.com", "/jquery-3.6.0.js")]
    #[case("https://use.fontawesome.com", "https", "use.fontawesome.com", "/")]
    fn parse_reference_url_returns_parts(
        #[case] text: &str,
        #[case] scheme: &str,
        #[case] host: &str,
        #[case] path: &str,
    ) {
        let url = parse_reference_url(text).unwrap();

        assert_eq!(url.scheme, scheme);
        assert_eq!(url.host, host);
        assert_eq!(url.path, path);
    }

    #[test]
    fn parse_reference_url_keeps_query() {
        let url = parse_reference_url("https://cdn.staticfile.org/vue/2.5.16/vue.js?x=1").unwrap();

        assert_eq!(url.query.as_deref(), Some("x=1"));
    }

    #[test]
    fn parse_reference_url_rejects_non_http_schemes() {
        assert_eq!(parse_reference_url("ftp://cdn.jsdelivr.net/npm/x@1"), None);
    }

    #[test]
    fn filter_references_keeps_only_known_providers() {
        let links = vec![
            link("https://cdnjs.cloudflare.com/ajax/libs/jquery/3.6.0/jquery.min.js"),
            link("https://example.com/app.js"),
            link("https://cdn.rawgit.com/user/repo/1.0.0/file.js"),
        ];

        let references = filter_references(links);

        let hosts: Vec<&str> = references.iter().map(|r| r.url.host.as_str()).collect();
        assert_eq!(hosts, vec!["cdnjs.cloudflare.com", "cdn.rawgit.com"]);
    }
}
