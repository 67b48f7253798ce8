//! URL sources: interactive prompt, positional arguments, URL list file.

use anyhow::{Context, Result};
use imgfetch_core::batch::parse_url_list;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

pub const PROMPT: &str = "Please enter the image URL(s) (comma-separated if multiple): ";

/// Writes the prompt to `out` and reads one line of comma-separated URLs.
pub fn prompt_for_urls<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<Vec<String>> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URLs from stdin")?;
    Ok(parse_url_list(&line))
}

/// Flattens positional arguments, each of which may be a comma list.
pub fn urls_from_args(args: &[String]) -> Vec<String> {
    args.iter().flat_map(|a| parse_url_list(a)).collect()
}

/// URLs from list-file text: blank lines and `#` comments skipped, each
/// remaining line parsed as a comma list.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(parse_url_list)
        .collect()
}

pub fn read_url_file(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read URL file {}", path.display()))?;
    Ok(parse_url_lines(&text))
}
