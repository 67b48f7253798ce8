//! `imgfetch name <url>` – show the filename a URL would be saved under.

use anyhow::Result;
use imgfetch_core::config::FetcherConfig;
use imgfetch_core::naming;

/// Prints the derived filename. No request is made, so an empty-path URL
/// shows the no-content default rather than a hash name.
pub fn run_name(cfg: &FetcherConfig, url: &str) -> Result<()> {
    println!("{}", derived_name(cfg, url));
    Ok(())
}

fn derived_name(cfg: &FetcherConfig, url: &str) -> String {
    naming::filename_for(url, None, cfg.sanitize_filenames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_bare_filename() {
        let cfg = FetcherConfig::default();
        assert_eq!(derived_name(&cfg, "http://x/a/photo.png"), "photo.png");
        assert_eq!(derived_name(&cfg, "http://x"), "downloaded_image.jpg");
    }

    #[test]
    fn follows_sanitize_setting() {
        let raw = FetcherConfig {
            sanitize_filenames: false,
            ..FetcherConfig::default()
        };
        assert_eq!(derived_name(&raw, "http://x/..cat.png"), "..cat.png");
        assert_eq!(derived_name(&FetcherConfig::default(), "http://x/..cat.png"), "cat.png");
    }
}
