//! Template file copying with pattern filtering and renames

use super::selector::CopyPatterns;
use super::store::TemplateStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map a template file name to the name it is written under.
///
/// Dotfiles and the project README are stored under neutral names so that
/// packaging tools do not drop or pick them up.
pub fn rename_file(name: &str) -> &str {
    match name {
        "gitignore" => ".gitignore",
        "README-template.md" => "README.md",
        _ => name,
    }
}

/// Mirror the store subtree at `template_path` into `target_dir`.
///
/// Directories are always created; files are written only when `patterns`
/// select them. Returns the paths written, relative to `target_dir`.
pub fn copy_template<S: TemplateStore + ?Sized>(
    store: &S,
    template_path: &str,
    target_dir: &Path,
    patterns: &CopyPatterns,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(target_dir)
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let mut copied_files = Vec::new();
    copy_dir(
        store,
        template_path,
        target_dir,
        Path::new(""),
        patterns,
        &mut copied_files,
    )?;
    Ok(copied_files)
}

fn copy_dir<S: TemplateStore + ?Sized>(
    store: &S,
    source_dir: &str,
    target_dir: &Path,
    relative_dir: &Path,
    patterns: &CopyPatterns,
    copied_files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in store.read_dir(source_dir)? {
        let source_path = format!("{}/{}", source_dir, entry.name);
        let target_name = rename_file(&entry.name);
        let target_path = target_dir.join(target_name);
        let relative_path = relative_dir.join(target_name);

        if entry.is_dir {
            fs::create_dir_all(&target_path).with_context(|| {
                format!("Failed to create directory: {}", target_path.display())
            })?;
            copy_dir(
                store,
                &source_path,
                &target_path,
                &relative_path,
                patterns,
                copied_files,
            )?;
        } else if patterns.should_copy(&entry.name) {
            let content = store.read_file(&source_path)?;
            fs::write(&target_path, &content)
                .with_context(|| format!("Failed to write file: {}", target_path.display()))?;
            debug!(file = %relative_path.display(), bytes = content.len(), "copied template file");
            copied_files.push(relative_path);
        } else {
            debug!(file = %relative_path.display(), "skipped excluded template file");
        }
    }

    Ok(())
}
