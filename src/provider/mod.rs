//! Provider resolution: which CDN serves a URL and what it references
//!
//! Each provider is matched by host, then its path grammar extracts a
//! library name and the version pinned by the reference.
//!
//! # Modules
//!
//! - [`types`]: ExtractionResult, Resolution and Rejected
//! - [`correspondences`]: Static library -> GitHub repository tables
//! - [`rules`]: Per-provider path grammars

pub mod correspondences;
pub mod rules;
pub mod types;

pub use types::{ExtractionResult, Rejected, Resolution};

use tracing::debug;

use crate::document::types::ReferenceUrl;

/// Known CDN providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// cdnjs.cloudflare.com
    Cdnjs,
    /// maxcdn.bootstrapcdn.com
    BootstrapCdn,
    /// code.jquery.com
    JqueryCode,
    /// ajax.googleapis.com
    GoogleHostedLibraries,
    /// cdn.jsdelivr.net
    JsDelivr,
    /// rawgit.com and its subdomains
    RawGit,
    /// code.ionicframework.com
    Ionic,
    /// use.fontawesome.com
    FontAwesomeKits,
    /// opensource.keycdn.com
    KeyCdn,
    /// cdn.staticfile.org
    Staticfile,
    /// ajax.microsoft.com and ajax.aspnetcdn.com
    MicrosoftAjax,
    /// cdn.ckeditor.com
    CkEditor,
}

/// How a rule recognises a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMatcher {
    Exact(&'static str),
    /// The host itself or any subdomain of it
    Suffix(&'static str),
}

impl HostMatcher {
    pub fn matches(&self, host: &str) -> bool {
        match self {
            HostMatcher::Exact(expected) => host == *expected,
            HostMatcher::Suffix(suffix) => {
                host == *suffix
                    || host
                        .strip_suffix(suffix)
                        .is_some_and(|rest| rest.ends_with('.'))
            }
        }
    }
}

/// Dispatch table. Exact hosts come first so that the broader suffix rules
/// never shadow them.
pub const PROVIDER_RULES: &[(HostMatcher, Provider)] = &[
    (HostMatcher::Exact("cdnjs.cloudflare.com"), Provider::Cdnjs),
    (
        HostMatcher::Exact("maxcdn.bootstrapcdn.com"),
        Provider::BootstrapCdn,
    ),
    (HostMatcher::Exact("code.jquery.com"), Provider::JqueryCode),
    (
        HostMatcher::Exact("ajax.googleapis.com"),
        Provider::GoogleHostedLibraries,
    ),
    (HostMatcher::Exact("cdn.jsdelivr.net"), Provider::JsDelivr),
    (HostMatcher::Exact("code.ionicframework.com"), Provider::Ionic),
    (
        HostMatcher::Exact("use.fontawesome.com"),
        Provider::FontAwesomeKits,
    ),
    (HostMatcher::Exact("opensource.keycdn.com"), Provider::KeyCdn),
    (HostMatcher::Exact("cdn.staticfile.org"), Provider::Staticfile),
    (
        HostMatcher::Exact("ajax.microsoft.com"),
        Provider::MicrosoftAjax,
    ),
    (
        HostMatcher::Exact("ajax.aspnetcdn.com"),
        Provider::MicrosoftAjax,
    ),
    (HostMatcher::Exact("cdn.ckeditor.com"), Provider::CkEditor),
    (HostMatcher::Suffix("rawgit.com"), Provider::RawGit),
];

impl Provider {
    /// Find the provider serving `host`, if any
    pub fn detect(host: &str) -> Option<Provider> {
        PROVIDER_RULES
            .iter()
            .find(|(matcher, _)| matcher.matches(host))
            .map(|(_, provider)| *provider)
    }

    /// Human-readable provider name
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Cdnjs => "cdnjs",
            Provider::BootstrapCdn => "BootstrapCDN",
            Provider::JqueryCode => "jQuery CDN",
            Provider::GoogleHostedLibraries => "Google Hosted Libraries",
            Provider::JsDelivr => "jsDelivr",
            Provider::RawGit => "RawGit",
            Provider::Ionic => "Ionic CDN",
            Provider::FontAwesomeKits => "Font Awesome",
            Provider::KeyCdn => "KeyCDN",
            Provider::Staticfile => "Staticfile CDN",
            Provider::MicrosoftAjax => "Microsoft Ajax CDN",
            Provider::CkEditor => "CKEditor CDN",
        }
    }

    /// Apply this provider's path grammar
    pub fn extract(&self, segments: &[&str]) -> Result<Resolution, Rejected> {
        use correspondences::{BOOTSTRAPCDN, GOOGLE_HOSTED_LIBRARIES, KEYCDN, STATICFILE};

        match self {
            Provider::Cdnjs => rules::cdnjs::extract(segments),
            Provider::BootstrapCdn => rules::keyed::extract(segments, BOOTSTRAPCDN, 1, 2),
            Provider::JqueryCode => rules::jquery::extract(segments),
            Provider::GoogleHostedLibraries => {
                rules::keyed::extract(segments, GOOGLE_HOSTED_LIBRARIES, 3, 4)
            }
            Provider::JsDelivr => rules::jsdelivr::extract(segments),
            Provider::RawGit => rules::rawgit::extract(segments),
            Provider::Ionic => rules::ionic::extract(segments),
            Provider::FontAwesomeKits => Ok(Resolution::AlwaysLatest {
                library_name: "font-awesome".to_string(),
            }),
            Provider::KeyCdn => rules::keyed::extract(segments, KEYCDN, 1, 2),
            Provider::Staticfile => rules::keyed::extract(segments, STATICFILE, 1, 2),
            Provider::MicrosoftAjax => rules::microsoft::extract(segments),
            Provider::CkEditor => rules::ckeditor::extract(segments),
        }
    }
}

/// Resolve a reference URL to the library and version it points at
pub fn resolve(url: &ReferenceUrl) -> Result<Resolution, Rejected> {
    let Some(provider) = Provider::detect(&url.host) else {
        return Err(Rejected::UnsupportedLayout(format!(
            "no provider for host {}",
            url.host
        )));
    };

    let result = provider.extract(&url.segments());
    if let Err(rejected) = &result {
        debug!("{} rejected {}: {}", provider.name(), url, rejected);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cdnjs.cloudflare.com", Some(Provider::Cdnjs))]
    #[case("ajax.aspnetcdn.com", Some(Provider::MicrosoftAjax))]
    #[case("ajax.microsoft.com", Some(Provider::MicrosoftAjax))]
    #[case("rawgit.com", Some(Provider::RawGit))]
    #[case("cdn.rawgit.com", Some(Provider::RawGit))]
    #[case("notrawgit.com", None)]
    #[case("cdnjs.cloudflare.com.evil.org", None)]
    #[case("example.com", None)]
    fn detect_returns_expected(#[case] host: &str, #[case] expected: Option<Provider>) {
        assert_eq!(Provider::detect(host), expected);
    }

    #[test]
    fn exact_rules_precede_suffix_rules() {
        let first_suffix = PROVIDER_RULES
            .iter()
            .position(|(m, _)| matches!(m, HostMatcher::Suffix(_)))
            .unwrap();

        assert!(
            PROVIDER_RULES[first_suffix..]
                .iter()
                .all(|(m, _)| matches!(m, HostMatcher::Suffix(_)))
        );
    }

    #[test]
    fn extract_never_panics_on_arbitrary_paths() {
        let paths = [
            "", "/", "//", "///", "/@", "/@/@", "/npm", "/npm/", "/npm/@", "/npm/@scope",
            "/npm/@scope/", "/gh", "/gh/a", "/gh/a/@", "/wp/a/b/c/d", "/a/b/c/d/e/f/g",
            "/ajax/libs", "/ajax/libs/x", "/ajax/x/y", "/ckeditor5/1.0.0", "/ui", "/jquery",
            "/é/ü/@/1.0.0", "/qunit", "/pep",
        ];

        for (_, provider) in PROVIDER_RULES {
            for path in paths {
                let segments: Vec<&str> = path.split('/').collect();
                let _ = provider.extract(&segments);
            }
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let url = ReferenceUrl {
            scheme: "https".to_string(),
            host: "cdn.jsdelivr.net".to_string(),
            path: "/npm/lodash@4".to_string(),
            query: None,
        };

        assert_eq!(resolve(&url), resolve(&url));
    }

    #[test]
    fn resolve_rejects_unknown_host() {
        let url = ReferenceUrl {
            scheme: "https".to_string(),
            host: "example.com".to_string(),
            path: "/lib.js".to_string(),
            query: None,
        };

        assert!(matches!(resolve(&url), Err(Rejected::UnsupportedLayout(_))));
    }
}
