// CLI module - command-line argument parsing and dispatch
//
// Two modes share one surface:
// - single file:  ghostforge <theme-file> <output-dir>
// - batch:        ghostforge --batch <themes-dir> <output-dir>
//
// `--dir` keeps unpacked theme directories instead of .jar archives,
// `--icls` emits standalone editor schemes for direct import.
//
// Exit status: non-zero only for a missing input path or mode misuse.
// Individual failures inside a batch are reported in the summary and do
// not fail the process.

use crate::batch::{self, Options};
use crate::config::{Config, VERSION};
use crate::emit::Packaging;
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

/// Ghostforge - convert Ghostty terminal themes into IDE theme plugins
#[derive(Parser)]
#[command(name = "ghostforge")]
#[command(version = VERSION)]
#[command(about = "Convert Ghostty terminal themes into IDE theme plugins", long_about = None)]
pub struct Cli {
    /// Input Ghostty theme file (or directory with --batch)
    pub input: PathBuf,

    /// Output directory for generated themes
    pub output: PathBuf,

    /// Convert every theme file in the input directory
    #[arg(long)]
    pub batch: bool,

    /// Create theme directories instead of .jar archives
    #[arg(long)]
    pub dir: bool,

    /// Create .icls color scheme files for direct editor import
    #[arg(long)]
    pub icls: bool,
}

impl Cli {
    /// Resolve run options from flags, falling back to the configured
    /// default packaging mode when `--dir` is not given.
    fn options(&self, config: &Config) -> Options {
        let packaging = if self.dir || config.output.packaging == "directory" {
            Packaging::Directory
        } else {
            Packaging::Archive
        };
        Options {
            packaging,
            icls: self.icls,
        }
    }
}

/// Execute the requested conversion. Errors returned here are terminal
/// (missing input, mode misuse, or a failed single-file conversion).
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    if !cli.input.exists() {
        bail!("input path {} does not exist", cli.input.display());
    }

    std::fs::create_dir_all(&cli.output)?;
    let options = cli.options(config);

    if cli.batch {
        if !cli.input.is_dir() {
            bail!("--batch requires the input to be a directory");
        }

        let summary = batch::convert_all(&cli.input, &cli.output, &options, config)?;
        println!(
            "Conversion complete: {}/{} themes converted",
            summary.converted, summary.total
        );
        Ok(())
    } else {
        if cli.input.is_dir() {
            bail!("use --batch to convert a directory of themes");
        }

        batch::convert_theme(&cli.input, &cli.output, &options, config)?;
        println!("Converted {}", cli.input.display());
        Ok(())
    }
}
