//! Console and JSON rendering of check results

use std::fmt::Write;

use serde::Serialize;

use crate::check::types::{CdnReference, CheckSummary};
use crate::version::comparator::ReferenceStatus;

/// Results of one checked file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub references: Vec<CdnReference>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileReport],
    summary: CheckSummary,
}

/// Summary over every file of a run
pub fn summarize(reports: &[FileReport]) -> CheckSummary {
    CheckSummary::from_references(reports.iter().flat_map(|report| &report.references))
}

/// Render one line per reference, prefixed with `path:line:column`
pub fn render_file(report: &FileReport) -> String {
    let mut out = String::new();
    for reference in &report.references {
        // Positions are displayed 1-indexed
        let _ = writeln!(
            out,
            "{}:{}:{}: {}",
            report.path,
            reference.region.line + 1,
            reference.region.column + 1,
            describe(reference)
        );
        if !reference.url.is_secure() {
            let _ = writeln!(
                out,
                "    {} is loaded over {}, consider using https",
                reference.url, reference.url.scheme
            );
        }
    }
    out
}

fn describe(reference: &CdnReference) -> String {
    let name = reference.library_name.as_deref().unwrap_or("unknown library");
    match reference.status {
        ReferenceStatus::UpToDate => match &reference.claimed_version {
            Some(claimed) => format!("up to date: {} {}", name, claimed),
            None => format!("up to date: {}", name),
        },
        ReferenceStatus::ToUpdate => match (&reference.claimed_version, &reference.latest_version) {
            (Some(claimed), Some(latest)) => {
                format!("to update: {} {} -> {}", name, claimed, latest)
            }
            _ => format!("to update: {} (no version pinned)", name),
        },
        ReferenceStatus::NotFound => format!("not found: {} ({})", name, reference.url),
    }
}

/// Render the batch summary
pub fn render_summary(summary: &CheckSummary) -> String {
    format!(
        "cdn-updates:\n\
         \u{2022} {} CDN already up to date.\n\
         \u{2022} {} CDN to update.\n\
         \u{2022} {} CDN not found.\n",
        summary.up_to_date, summary.to_update, summary.not_found
    )
}

/// Full text report: every file, then the summary
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out: String = reports.iter().map(render_file).collect();
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_summary(&summarize(reports)));
    out
}

/// JSON report with every reference and the summary
pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        files: reports,
        summary: summarize(reports),
    })
}
