//! `imgfetch fetch [URLS]...` – run a batch and print a line per URL.

use crate::cli::{input, report, FetchArgs};
use anyhow::Result;
use imgfetch_core::batch::Fetcher;
use imgfetch_core::config::FetcherConfig;
use std::io::{self, Write};

pub fn run_fetch(cfg: &FetcherConfig, args: FetchArgs) -> Result<()> {
    let cfg = apply_overrides(cfg, &args);

    let mut stdout = io::stdout().lock();
    report::write_banner(&mut stdout)?;

    let mut urls = input::urls_from_args(&args.urls);
    if let Some(path) = &args.from_file {
        urls.extend(input::read_url_file(path)?);
    }
    if args.urls.is_empty() && args.from_file.is_none() {
        urls = input::prompt_for_urls(io::stdin().lock(), &mut stdout)?;
    }

    let fetcher = Fetcher::new(&cfg);
    let summary = fetcher.run(&urls, |item| {
        if let Err(e) = report::write_item(&mut stdout, item) {
            tracing::warn!("failed to write status line: {}", e);
        }
    })?;

    report::write_closing(&mut stdout)?;
    stdout.flush()?;

    tracing::debug!(
        total = summary.items.len(),
        saved = summary.saved(),
        failed = summary.failed(),
        "fetch command done"
    );
    Ok(())
}

/// Command-line flags win over the config file for this run.
fn apply_overrides(cfg: &FetcherConfig, args: &FetchArgs) -> FetcherConfig {
    let mut cfg = cfg.clone();
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(secs) = args.timeout {
        cfg.timeout_secs = secs;
    }
    cfg
}
