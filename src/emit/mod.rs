// Theme package emitter
//
// Writes the three artifacts a converted theme consists of:
//
//   <output>/<name>-theme/
//     META-INF/plugin.xml                  manifest
//     resources/<name>.theme.json          UI descriptor
//     resources/<name>.xml                 editor color scheme
//
// plus, in archive mode, a sibling `<name>-theme.jar`. I/O failures here
// are the only per-theme failure surface in the whole pipeline; they
// propagate to the batch driver which records them and moves on.

mod archive;
mod editor_scheme;
mod manifest;
mod ui_theme;

pub use archive::package_archive;
pub use editor_scheme::editor_scheme_xml;
pub use manifest::plugin_xml;
pub use ui_theme::ui_theme_json;

use crate::derive::DerivedColors;
use crate::theme::Theme;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a converted theme is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packaging {
    /// Theme directory plus a sibling `.jar` archive (the default).
    Archive,
    /// Theme directory only.
    Directory,
}

/// Paths produced for one converted theme.
#[derive(Debug)]
pub struct EmittedTheme {
    pub theme_dir: PathBuf,
    pub archive: Option<PathBuf>,
}

/// Write the full theme package under `output_dir`.
///
/// Creates `<output_dir>/<name>-theme/` (and parents) as needed. Writes
/// never touch anything outside that directory apart from the sibling
/// archive file.
pub fn emit_theme(
    theme: &Theme,
    derived: &DerivedColors,
    output_dir: &Path,
    packaging: Packaging,
    vendor: &str,
) -> Result<EmittedTheme> {
    let theme_dir = output_dir.join(format!("{}-theme", theme.name));
    let resources_dir = theme_dir.join("resources");
    let meta_inf_dir = theme_dir.join("META-INF");

    std::fs::create_dir_all(&resources_dir)
        .with_context(|| format!("failed to create {}", resources_dir.display()))?;
    std::fs::create_dir_all(&meta_inf_dir)
        .with_context(|| format!("failed to create {}", meta_inf_dir.display()))?;

    let descriptor = serde_json::to_string_pretty(&ui_theme_json(theme, derived))
        .context("failed to serialize UI theme descriptor")?;
    let descriptor_path = resources_dir.join(format!("{}.theme.json", theme.name));
    std::fs::write(&descriptor_path, descriptor)
        .with_context(|| format!("failed to write {}", descriptor_path.display()))?;

    let scheme_path = resources_dir.join(format!("{}.xml", theme.name));
    std::fs::write(&scheme_path, editor_scheme_xml(theme, derived, true))
        .with_context(|| format!("failed to write {}", scheme_path.display()))?;

    let manifest_path = meta_inf_dir.join("plugin.xml");
    std::fs::write(&manifest_path, plugin_xml(theme, derived, vendor))
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    debug!(theme = %theme.name, dir = %theme_dir.display(), "emitted theme package");

    let archive = match packaging {
        Packaging::Archive => Some(package_archive(&theme_dir, output_dir)?),
        Packaging::Directory => None,
    };

    Ok(EmittedTheme { theme_dir, archive })
}

/// Write a standalone `.icls` editor scheme for direct IDE import.
pub fn emit_icls(theme: &Theme, derived: &DerivedColors, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let path = output_dir.join(format!("{}.icls", theme.name));
    std::fs::write(&path, editor_scheme_xml(theme, derived, false))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use crate::theme::parse_theme_str;

    fn sample_theme() -> Theme {
        parse_theme_str(
            "midnight",
            "background = #1a1b26\nforeground = #c0caf5\npalette = 4=#7aa2f7\n",
        )
    }

    #[test]
    fn test_emit_directory_layout() {
        let out = tempfile::tempdir().unwrap();
        let theme = sample_theme();
        let derived = derive(&theme);

        let emitted =
            emit_theme(&theme, &derived, out.path(), Packaging::Directory, "ghostforge").unwrap();

        assert_eq!(emitted.theme_dir, out.path().join("midnight-theme"));
        assert!(emitted.archive.is_none());
        assert!(emitted.theme_dir.join("META-INF").join("plugin.xml").exists());
        assert!(emitted
            .theme_dir
            .join("resources")
            .join("midnight.theme.json")
            .exists());
        assert!(emitted.theme_dir.join("resources").join("midnight.xml").exists());
    }

    #[test]
    fn test_emit_archive_mode_adds_sibling_jar() {
        let out = tempfile::tempdir().unwrap();
        let theme = sample_theme();
        let derived = derive(&theme);

        let emitted =
            emit_theme(&theme, &derived, out.path(), Packaging::Archive, "ghostforge").unwrap();

        let archive = emitted.archive.unwrap();
        assert_eq!(archive, out.path().join("midnight-theme.jar"));
        assert!(archive.exists());
        // The archive is a sibling of the directory, not nested inside it
        assert!(!emitted.theme_dir.join("midnight-theme.jar").exists());
    }

    #[test]
    fn test_emitted_descriptor_parses_back() {
        let out = tempfile::tempdir().unwrap();
        let theme = sample_theme();
        let derived = derive(&theme);
        emit_theme(&theme, &derived, out.path(), Packaging::Directory, "ghostforge").unwrap();

        let json = std::fs::read_to_string(
            out.path()
                .join("midnight-theme")
                .join("resources")
                .join("midnight.theme.json"),
        )
        .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["colors"]["primaryBackground"], "#1a1b26");
        assert_eq!(doc["colors"]["primaryForeground"], "#c0caf5");
    }

    #[test]
    fn test_emit_icls() {
        let out = tempfile::tempdir().unwrap();
        let theme = sample_theme();
        let path = emit_icls(&theme, &derive(&theme), out.path()).unwrap();
        assert_eq!(path, out.path().join("midnight.icls"));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("<scheme"));
    }

    #[test]
    fn test_emit_into_unwritable_target_fails() {
        let out = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = out.path().join("occupied");
        std::fs::write(&blocker, "not a directory").unwrap();

        let theme = sample_theme();
        let derived = derive(&theme);
        assert!(emit_theme(&theme, &derived, &blocker, Packaging::Directory, "ghostforge").is_err());
    }
}
