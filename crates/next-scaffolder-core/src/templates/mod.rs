//! Template storage, selection, copying and post-copy rewrites
//!
//! This module provides:
//! - Template selection and install request types
//! - Read-only template stores (embedded, local directory, zip archive)
//! - The install pipeline: copy, config rewrites, `src/` layout, `package.json`

pub mod archive;
pub mod copier;
pub mod embedded;
pub mod install;
pub mod layout;
pub mod package_json;
pub mod rewrite;
pub mod selector;
pub mod store;
pub mod types;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub use copier::copy_template;
pub use install::{install_template, InstallReport};
pub use package_json::PackageJson;
pub use selector::CopyPatterns;
pub use store::{LocalStore, MemoryStore, StoreEntry, TemplateStore};
pub use types::{
    get_template_file, Bundler, InstallRequest, Linter, PackageManager, ParseError,
    TemplateFamily, TemplateMode, TemplateSelection, DEFAULT_IMPORT_ALIAS,
};

/// Pack a template directory into a zip archive usable with `--template-archive`
pub fn build_zip(template_dir: &Path, output: &Path) -> Result<()> {
    println!(
        "{}",
        format!("Packing templates from {}...", template_dir.display())
            .cyan()
            .bold()
    );

    let zip_bytes = archive::pack_directory(template_dir)?;
    std::fs::write(output, &zip_bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} ({} bytes)",
        "Built".green().bold(),
        output.display(),
        zip_bytes.len()
    );

    Ok(())
}
