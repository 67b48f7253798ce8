//! CLI for imgfetch.

mod commands;
mod input;
mod report;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use imgfetch_core::config;
use std::path::PathBuf;

use commands::{run_fetch, run_name};

/// Top-level CLI. With no subcommand, prompts for URLs interactively.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(version, about = "Fetch images from URLs into a local folder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch images and save them to the output directory.
    Fetch(FetchArgs),

    /// Print the filename a URL would be saved under, without fetching it.
    Name {
        /// Image URL.
        url: String,
    },
}

#[derive(Debug, Default, Args)]
pub struct FetchArgs {
    /// Image URLs. Each argument may itself be a comma-separated list.
    /// With no URLs and no --from-file, prompts on stdin.
    pub urls: Vec<String>,

    /// Read URLs from a file (one or more per line, comma-separated; lines starting with `#` are ignored).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Save images here instead of the configured directory.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (connect, and longest stall while receiving).
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            None => run_fetch(&cfg, FetchArgs::default())?,
            Some(CliCommand::Fetch(args)) => run_fetch(&cfg, args)?,
            Some(CliCommand::Name { url }) => run_name(&cfg, &url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
