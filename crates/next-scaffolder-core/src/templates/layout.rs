//! Optional `src/` directory layout

use super::types::{TemplateFamily, TemplateMode};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level directories moved under `src/`
pub const SRC_DIR_NAMES: &[&str] = &["app", "pages", "styles"];

/// The entry-point page of a template and the self-reference it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Path of the page file relative to `src/`, e.g. `app/page.tsx`
    pub file: String,
    /// Reference to itself inside the page, e.g. `app/page`
    pub reference: String,
}

impl EntryPoint {
    pub fn for_template(family: TemplateFamily, mode: TemplateMode) -> Self {
        let (page_dir, page_file) = if family.uses_app_router() {
            ("app", "page")
        } else {
            ("pages", "index")
        };
        Self {
            file: format!("{}/{}.{}", page_dir, page_file, mode.page_extension()),
            reference: format!("{}/{}", page_dir, page_file),
        }
    }

    /// The reference once the page lives under `src/`
    pub fn src_reference(&self) -> String {
        format!("src/{}", self.reference)
    }
}

/// Move the known top-level directories under `src/` and patch the entry
/// page's reference to itself.
///
/// Directories already moved stay moved if patching the entry page fails.
/// Returns the directories that were moved.
pub fn move_dirs_to_src(
    root: &Path,
    family: TemplateFamily,
    mode: TemplateMode,
) -> Result<Vec<PathBuf>> {
    let src_dir = root.join("src");
    fs::create_dir_all(&src_dir)
        .with_context(|| format!("Failed to create directory: {}", src_dir.display()))?;

    let mut moved = Vec::new();
    for dir_name in SRC_DIR_NAMES {
        let old_path = root.join(dir_name);
        let new_path = src_dir.join(dir_name);

        if old_path.exists() {
            fs::rename(&old_path, &new_path).with_context(|| {
                format!(
                    "Failed to move {} to {}",
                    old_path.display(),
                    new_path.display()
                )
            })?;
            debug!(from = %old_path.display(), to = %new_path.display(), "moved directory");
            moved.push(new_path);
        }
    }

    if family.is_api() {
        return Ok(moved);
    }

    let entry = EntryPoint::for_template(family, mode);
    let page_path = src_dir.join(&entry.file);
    let content = fs::read_to_string(&page_path)
        .with_context(|| format!("Failed to read {}", page_path.display()))?;
    let new_content = content.replacen(&entry.reference, &entry.src_reference(), 1);
    fs::write(&page_path, new_content)
        .with_context(|| format!("Failed to write {}", page_path.display()))?;

    Ok(moved)
}
