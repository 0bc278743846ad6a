// Batch conversion driver
//
// Runs the parse -> derive -> emit pipeline, once per input file. Each
// conversion is independent: a per-file failure is logged with the
// originating file name and the batch continues, so one corrupt or
// unreadable theme never sinks the run. The final Summary reports how many
// of the enumerated files converted.

use crate::config::Config;
use crate::derive;
use crate::emit::{self, Packaging};
use crate::theme;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Per-run conversion options, resolved from CLI flags and config.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub packaging: Packaging,
    /// Emit standalone `.icls` schemes instead of full plugin packages.
    pub icls: bool,
}

/// Batch outcome: `converted` of `total` enumerated files succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub total: usize,
}

/// Convert a single theme file. All three pipeline stages run here;
/// only I/O (reading the input, writing artifacts) can fail.
pub fn convert_theme(
    input_file: &Path,
    output_dir: &Path,
    options: &Options,
    config: &Config,
) -> Result<()> {
    let theme = theme::parse_theme_file(input_file)?;
    let derived = derive::derive(&theme);

    if options.icls {
        let path = emit::emit_icls(&theme, &derived, output_dir)?;
        info!(theme = %theme.name, path = %path.display(), "generated editor scheme");
    } else {
        let emitted = emit::emit_theme(
            &theme,
            &derived,
            output_dir,
            options.packaging,
            &config.plugin.vendor,
        )?;
        match &emitted.archive {
            Some(archive) => {
                info!(theme = %theme.name, archive = %archive.display(), "generated theme package")
            }
            None => {
                info!(theme = %theme.name, dir = %emitted.theme_dir.display(), "generated theme directory")
            }
        }
    }
    Ok(())
}

/// Convert every regular file in `input_dir` (non-recursive).
///
/// Returns the summary; only enumerating the directory itself can fail.
pub fn convert_all(
    input_dir: &Path,
    output_dir: &Path,
    options: &Options,
    config: &Config,
) -> Result<Summary> {
    let mut files: Vec<_> = std::fs::read_dir(input_dir)
        .with_context(|| format!("failed to read input directory {}", input_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // Deterministic processing order regardless of directory enumeration
    files.sort();

    let total = files.len();
    info!(total, input = %input_dir.display(), "starting batch conversion");

    let mut converted = 0;
    for file in &files {
        match convert_theme(file, output_dir, options, config) {
            Ok(()) => converted += 1,
            Err(e) => {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.display().to_string());
                warn!(file = %name, "failed to convert theme: {e:#}");
            }
        }
    }

    Ok(Summary { converted, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_options() -> Options {
        Options {
            packaging: Packaging::Directory,
            icls: false,
        }
    }

    #[test]
    fn test_batch_counts_successes_and_failures() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        std::fs::write(input.path().join("alpha"), "background = #111111\n").unwrap();
        std::fs::write(input.path().join("beta"), "background = #fefefe\n").unwrap();
        // Subdirectories are not enumerated
        std::fs::create_dir(input.path().join("nested")).unwrap();
        // Force a genuine per-file emission failure: the theme name plus
        // the "-theme" suffix exceeds the filesystem name limit, so the
        // output directory cannot be created
        let long_name = "x".repeat(250);
        std::fs::write(input.path().join(&long_name), "background = #222222\n").unwrap();

        let summary =
            convert_all(input.path(), output.path(), &test_options(), &Config::default()).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.converted, 2);
        assert!(output.path().join("alpha-theme").exists());
        assert!(output.path().join("beta-theme").exists());
        // No output directory for the failed file
        assert!(!output.path().join(format!("{long_name}-theme")).exists());
    }

    #[test]
    fn test_batch_missing_input_dir_fails() {
        let output = tempfile::tempdir().unwrap();
        assert!(convert_all(
            Path::new("/nonexistent/themes"),
            output.path(),
            &test_options(),
            &Config::default()
        )
        .is_err());
    }

    #[test]
    fn test_icls_batch() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("mono"), "background = #1e1e1e\n").unwrap();

        let options = Options {
            packaging: Packaging::Directory,
            icls: true,
        };
        let summary =
            convert_all(input.path(), output.path(), &options, &Config::default()).unwrap();
        assert_eq!(summary, Summary { converted: 1, total: 1 });
        assert!(output.path().join("mono.icls").exists());
        assert!(!output.path().join("mono-theme").exists());
    }

    #[test]
    fn test_malformed_content_still_converts() {
        // Garbage content parses to defaults; only unreadable files fail
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("junk"), b"\xff\xfe not a theme at all").unwrap();

        let summary =
            convert_all(input.path(), output.path(), &test_options(), &Config::default()).unwrap();
        assert_eq!(summary, Summary { converted: 1, total: 1 });
        assert!(output.path().join("junk-theme").exists());
    }
}
