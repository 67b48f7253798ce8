//! Console status lines.

use imgfetch_core::batch::{ItemOutcome, ItemReport};
use std::io::{self, Write};

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Ubuntu Image Fetcher")?;
    writeln!(out, "A tool for mindfully collecting images from the web")?;
    writeln!(out)
}

/// One or two lines per URL.
pub fn write_item<W: Write>(out: &mut W, item: &ItemReport) -> io::Result<()> {
    let url = &item.url;
    match &item.outcome {
        ItemOutcome::Saved { filename, path } => {
            writeln!(out, "✓ Successfully fetched: {}", filename)?;
            writeln!(out, "✓ Image saved to {}", path.display())
        }
        ItemOutcome::NotImage { .. } => writeln!(out, "✗ Skipped (not an image): {}", url),
        ItemOutcome::Duplicate { filename, .. } => {
            writeln!(out, "⚠ Duplicate skipped: {}", filename)
        }
        ItemOutcome::ConnectionError(msg) => {
            writeln!(out, "✗ Connection error while fetching {}: {}", url, msg)
        }
        ItemOutcome::Error(msg) => writeln!(out, "✗ An error occurred with {}: {}", url, msg),
    }
}

pub fn write_closing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Connection strengthened. Community enriched.")
}
