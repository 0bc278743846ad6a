// Archive packaging
//
// Bundles an emitted theme directory into a single zip container with a
// `.jar` extension, which is the install format the host IDE accepts.
// Entry paths are relative to the theme directory root; the archive lands
// next to the directory, never inside it.

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Package `theme_dir` into `<output_dir>/<dirname>.jar`.
pub fn package_archive(theme_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    let dir_name = theme_dir
        .file_name()
        .context("theme directory has no name")?
        .to_string_lossy();
    let archive_path = output_dir.join(format!("{dir_name}.jar"));

    let file = File::create(&archive_path)
        .with_context(|| format!("failed to create archive {}", archive_path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // Deterministic entry order: walkdir sorted by file name
    for entry in WalkDir::new(theme_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let relative = entry
            .path()
            .strip_prefix(theme_dir)
            .context("walkdir entry outside theme dir")?;
        // Zip entry names always use forward slashes
        let entry_name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(entry_name, options)
            .with_context(|| format!("failed to add {} to archive", relative.display()))?;
        let mut src = File::open(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        io::copy(&mut src, &mut zip)
            .with_context(|| format!("failed to compress {}", relative.display()))?;
    }

    zip.finish().context("failed to finalize archive")?;
    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_sits_beside_directory() {
        let out = tempfile::tempdir().unwrap();
        let theme_dir = out.path().join("sample-theme");
        std::fs::create_dir_all(theme_dir.join("META-INF")).unwrap();
        std::fs::write(theme_dir.join("META-INF").join("plugin.xml"), "<idea-plugin/>").unwrap();
        std::fs::write(theme_dir.join("readme.txt"), "hi").unwrap();

        let archive = package_archive(&theme_dir, out.path()).unwrap();
        assert_eq!(archive, out.path().join("sample-theme.jar"));
        assert!(archive.exists());
        // Non-empty zip: at least the local file headers
        assert!(std::fs::metadata(&archive).unwrap().len() > 0);
    }

    #[test]
    fn test_archive_into_missing_dir_fails() {
        let out = tempfile::tempdir().unwrap();
        let theme_dir = out.path().join("sample-theme");
        std::fs::create_dir_all(&theme_dir).unwrap();
        let missing = out.path().join("nope");
        assert!(package_archive(&theme_dir, &missing).is_err());
    }
}
