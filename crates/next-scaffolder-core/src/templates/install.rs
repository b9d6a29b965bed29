//! The template installation pipeline
//!
//! Steps run strictly in order: copy, config rewrites, `src/` layout,
//! `package.json`. The first failing step aborts the rest; files already
//! written are left in place.

use super::copier::copy_template;
use super::layout::move_dirs_to_src;
use super::package_json::{write_package_json, PackageJson};
use super::rewrite;
use super::selector::CopyPatterns;
use super::store::TemplateStore;
use super::types::{Bundler, InstallRequest};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// What an install produced
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Template files written, relative to the project root
    pub copied_files: Vec<PathBuf>,
    /// Files whose imports were rewritten to a custom alias
    pub alias_rewrites: Vec<String>,
    /// Directories moved under `src/`
    pub moved_dirs: Vec<PathBuf>,
    pub package_json: PackageJson,
}

/// Install the selected template into `request.root`
pub fn install_template<S: TemplateStore + ?Sized>(
    store: &S,
    request: &InstallRequest,
) -> Result<InstallReport> {
    let root = request.root();
    let mode = request.mode();
    info!(template = %request.template, root = %root.display(), "installing template");

    let patterns = CopyPatterns::for_request(request);
    let copied_files = copy_template(store, &request.template.store_path(), root, &patterns)
        .context("failed to copy template files")?;
    info!(files = copied_files.len(), "copied template files");

    if request.bundler == Bundler::Rspack {
        rewrite::inject_rspack(root, mode).context("failed to modify next.config for Rspack")?;
    }

    if request.react_compiler {
        rewrite::inject_react_compiler(root, mode)
            .context("failed to modify next.config for React Compiler")?;
    }

    rewrite::update_config_paths(root, mode, request.src_dir, &request.import_alias)
        .context("failed to update config paths")?;

    let alias_rewrites = if rewrite::is_custom_alias(&request.import_alias) {
        let rewritten = rewrite::update_import_aliases(root, &request.import_alias)
            .context("failed to update import aliases")?;
        info!(files = rewritten.len(), alias = %request.import_alias, "rewrote import aliases");
        rewritten
    } else {
        Vec::new()
    };

    let moved_dirs = if request.src_dir {
        move_dirs_to_src(root, request.template.family, mode)
            .context("failed to move directories to src")?
    } else {
        Vec::new()
    };

    let package_json = write_package_json(request).context("failed to generate package.json")?;
    info!(name = %package_json.name, "project initialized");

    Ok(InstallReport {
        copied_files,
        alias_rewrites,
        moved_dirs,
        package_json,
    })
}
