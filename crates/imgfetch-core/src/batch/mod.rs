//! Sequential batch: fetch, classify, name, deduplicate, write.
//!
//! One URL is fully fetched and written before the next starts. A failure
//! on one URL becomes that URL's outcome; the batch always runs to the end.

mod outcome;

pub use outcome::{BatchReport, ItemOutcome, ItemReport};

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::fetch::{self, FetchOptions};
use crate::naming;
use crate::storage::{OutputDir, WriteOutcome};
use anyhow::Result;
use std::path::PathBuf;

/// Split comma-separated input into URLs: trim each entry, drop empties.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Batch runner. Holds only settings; no state carries across URLs besides
/// the output directory on disk.
#[derive(Debug, Clone)]
pub struct Fetcher {
    options: FetchOptions,
    output_dir: PathBuf,
    sanitize: bool,
}

impl Fetcher {
    pub fn new(cfg: &FetcherConfig) -> Self {
        Self {
            options: FetchOptions::from(cfg),
            output_dir: cfg.output_dir.clone(),
            sanitize: cfg.sanitize_filenames,
        }
    }

    /// Parse `text` with [`parse_url_list`] and run the batch.
    pub fn run_text<F>(&self, text: &str, on_item: F) -> Result<BatchReport>
    where
        F: FnMut(&ItemReport),
    {
        self.run(&parse_url_list(text), on_item)
    }

    /// Process `urls` in order, calling `on_item` after each one.
    ///
    /// Only failing to create the output directory returns `Err`; per-URL
    /// failures are recorded in the report.
    pub fn run<F>(&self, urls: &[String], mut on_item: F) -> Result<BatchReport>
    where
        F: FnMut(&ItemReport),
    {
        let out = OutputDir::ensure(&self.output_dir)?;
        tracing::debug!(
            count = urls.len(),
            dir = %out.path().display(),
            "starting batch"
        );

        let mut report = BatchReport::default();
        for url in urls {
            let item = ItemReport {
                url: url.clone(),
                outcome: self.process(&out, url),
            };
            on_item(&item);
            report.items.push(item);
        }

        tracing::info!(
            saved = report.saved(),
            skipped = report.skipped(),
            duplicates = report.duplicates(),
            failed = report.failed(),
            "batch finished"
        );
        Ok(report)
    }

    fn process(&self, out: &OutputDir, url: &str) -> ItemOutcome {
        match self.try_process(out, url) {
            Ok(outcome) => outcome,
            Err(e) if e.is_connection() => {
                tracing::warn!(url, error = %e, "connection error");
                ItemOutcome::ConnectionError(e.to_string())
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed");
                ItemOutcome::Error(e.to_string())
            }
        }
    }

    fn try_process(&self, out: &OutputDir, url: &str) -> Result<ItemOutcome, FetchError> {
        let response = fetch::fetch(url, &self.options)?;
        if !response.is_image() {
            tracing::debug!(url, content_type = ?response.content_type, "not an image");
            return Ok(ItemOutcome::NotImage {
                content_type: response.content_type,
            });
        }

        let filename = naming::filename_for(url, Some(&response.body), self.sanitize);
        let outcome = match out.write_new(&filename, &response.body)? {
            WriteOutcome::Written(path) => {
                tracing::info!(url, path = %path.display(), bytes = response.body.len(), "saved");
                ItemOutcome::Saved { filename, path }
            }
            WriteOutcome::Exists(path) => {
                tracing::debug!(url, path = %path.display(), "duplicate name");
                ItemOutcome::Duplicate { filename, path }
            }
        };
        Ok(outcome)
    }
}
