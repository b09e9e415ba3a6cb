//! Library to GitHub repository correspondences for providers without an API

/// Upstream repository of a library served by a CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repository {
    pub owner: &'static str,
    pub name: &'static str,
    /// Compare by prefix instead of equality
    pub fuzzy: bool,
}

const fn repo(owner: &'static str, name: &'static str) -> Repository {
    Repository {
        owner,
        name,
        fuzzy: false,
    }
}

const fn fuzzy_repo(owner: &'static str, name: &'static str) -> Repository {
    Repository {
        owner,
        name,
        fuzzy: true,
    }
}

pub type CorrespondenceTable = &'static [(&'static str, Repository)];

/// Look up a provider-local library key, ignoring ASCII case
pub fn lookup(table: CorrespondenceTable, key: &str) -> Option<Repository> {
    table
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
        .map(|(_, repository)| *repository)
}

pub const BOOTSTRAPCDN: CorrespondenceTable = &[
    ("bootstrap", repo("twbs", "bootstrap")),
    ("font-awesome", repo("FortAwesome", "Font-Awesome")),
    ("bootlint", repo("twbs", "bootlint")),
    ("bootswatch", repo("thomaspark", "bootswatch")),
];

pub const GOOGLE_HOSTED_LIBRARIES: CorrespondenceTable = &[
    ("dojo", repo("dojo", "dojo")),
    ("ext-core", repo("ExtCore", "ExtCore")),
    ("hammerjs", repo("hammerjs", "hammer.js")),
    (
        "indefinite-observable",
        repo("material-motion", "indefinite-observable-js"),
    ),
    ("jquery", repo("jquery", "jquery")),
    ("jquerymobile", repo("jquery", "jquery-mobile")),
    ("jqueryui", repo("jquery", "jquery-ui")),
    ("mootools", repo("mootools", "mootools-core")),
    ("myanmar-tools", repo("googlei18n", "myanmar-tools")),
    ("prototype", repo("sstephenson", "prototype")),
    ("scriptaculous", repo("madrobby", "scriptaculous")),
    ("shaka-player", repo("google", "shaka-player")),
    ("spf", repo("youtube", "spfjs")),
    ("swfobject", repo("swfobject", "swfobject")),
    ("threejs", repo("mrdoob", "three.js")),
    ("webfont", repo("typekit", "webfontloader")),
];

pub const KEYCDN: CorrespondenceTable = &[
    ("fontawesome", repo("FortAwesome", "Font-Awesome")),
    ("pure", repo("yahoo", "pure")),
];

pub const STATICFILE: CorrespondenceTable = &[
    ("react", repo("facebook", "react")),
    ("vue", repo("vuejs", "vue")),
    ("angular.js", repo("angular", "angular.js")),
    ("jquery", repo("jquery", "jquery")),
];

/// <https://docs.microsoft.com/en-us/aspnet/ajax/cdn/>
pub const MICROSOFT_AJAX: CorrespondenceTable = &[
    ("jquery", repo("jquery", "jquery")),
    ("jquery.migrate", repo("jquery", "jquery-migrate")),
    ("jquery.ui", repo("jquery", "jquery-ui")),
    ("jquery.mobile", repo("jquery", "jquery-mobile")),
    ("jquery.validate", repo("jquery-validation", "jquery-validation")),
    ("jquery.templates", fuzzy_repo("BorisMoore", "jquery-tmpl")),
    ("jquery.cycle", repo("malsup", "cycle2")),
    ("jquery.dataTables", repo("dataTables", "dataTables")),
    ("jshint", repo("jshint", "jshint")),
    ("modernizr", repo("Modernizr", "Modernizr")),
    ("respond", repo("scottjehl", "Respond")),
    ("globalize", repo("globalizejs", "globalize")),
    ("knockout", repo("knockout", "knockout")),
    ("bootstrap", repo("twbs", "bootstrap")),
    (
        "bootstrap-touch-carousel",
        repo("ixisio", "bootstrap-touch-carousel"),
    ),
    ("hammer.js", repo("hammerjs", "hammer.js")),
    ("signalr", repo("SignalR", "SignalR")),
];
