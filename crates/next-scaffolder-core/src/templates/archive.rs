//! Zip archives of template trees
//!
//! A template directory can be packed into a single zip (the `build-zip`
//! command) and later loaded back as a [`MemoryStore`], so templates can be
//! swapped without rebuilding the binary.

use super::store::MemoryStore;
use anyhow::{Context, Result};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Pack every file under `template_dir` into an in-memory zip.
/// Entry names are `/`-separated paths relative to `template_dir`.
pub fn pack_directory(template_dir: &Path) -> Result<Vec<u8>> {
    if !template_dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_dir.display());
    }

    let mut zip_buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut zip_buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for entry in WalkDir::new(template_dir).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to walk {}", template_dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(template_dir)
                .context("Walked outside the template directory")?;
            let zip_path = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            let content = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            zip.start_file(&zip_path, options)?;
            zip.write_all(&content)?;
            debug!(file = %zip_path, bytes = content.len(), "packed template file");
        }

        zip.finish()?;
    }

    Ok(zip_buffer)
}

impl MemoryStore {
    /// Load a template tree from zip bytes produced by [`pack_directory`]
    pub fn from_zip(zip_bytes: &[u8]) -> Result<Self> {
        let mut archive =
            ZipArchive::new(Cursor::new(zip_bytes)).context("Failed to read template archive")?;

        let mut store = MemoryStore::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }

            let path = file.name().to_string();
            let mut contents = Vec::new();
            file.read_to_end(&mut contents)
                .with_context(|| format!("Failed to extract {}", path))?;
            store.insert(path, contents);
        }

        if store.is_empty() {
            anyhow::bail!("Template archive contains no files");
        }

        Ok(store)
    }

    /// Load a template tree from a zip file on disk
    pub fn from_zip_file(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_zip(&bytes).with_context(|| format!("Invalid template archive {}", path.display()))
    }
}
