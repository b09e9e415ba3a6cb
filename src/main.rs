use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use cdn_updates::check::UpdateChecker;
use cdn_updates::config::CheckerConfig;
use cdn_updates::document;
use cdn_updates::logging::{init_logging, log_destination};
use cdn_updates::report::{self, FileReport};

#[derive(Parser)]
#[command(name = "cdn-updates")]
#[command(version, about = "Check whether CDN references in documents are up to date")]
struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// GitHub token used for tag and release lookups
    /// (falls back to $CDN_UPDATES_GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,

    /// Write logs as JSON lines to a file instead of stderr
    /// (`--log-file=PATH`; bare `--log-file` uses $XDG_DATA_HOME/cdn-updates/cdn-updates.log)
    #[arg(long, value_name = "PATH", num_args = 0..=1, require_equals = true)]
    log_file: Option<Option<PathBuf>>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Documents to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

async fn run(cli: Cli, config: CheckerConfig) -> anyhow::Result<bool> {
    let mut documents = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;
        documents.push((path.display().to_string(), content));
    }

    let checker = UpdateChecker::new(config);
    let mut reports = Vec::with_capacity(documents.len());
    for (path, content) in documents {
        let pending = document::scan(&content);
        debug!("{}: {} CDN references", path, pending.len());
        let references = checker.check_all(&pending).await;
        reports.push(FileReport { path, references });
    }

    if cli.json {
        println!("{}", report::render_json(&reports)?);
    } else {
        print!("{}", report::render_text(&reports));
    }

    Ok(report::summarize(&reports).all_up_to_date())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CheckerConfig::load(cli.config.as_deref(), cli.token.clone(), cli.debug) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("cdn-updates: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let log_file = log_destination(cli.log_file.clone());
    let _guard = match init_logging(config.debug, log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("cdn-updates: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(cli, config)));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("cdn-updates: {:#}", e);
            ExitCode::from(2)
        }
    }
}
