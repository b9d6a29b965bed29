//! Product configuration trait for CLI binaries
//!
//! The core never hardcodes product identity. A binary implements this trait
//! to name itself, point at its docs and word its closing instructions.

use crate::templates::package_json::NEXT_VERSION_ENV;
use crate::templates::PackageManager;
use std::path::Path;

/// Configuration trait for scaffolder front ends
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (CLI command name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// URL for framework documentation
    fn docs_url(&self) -> &'static str;

    /// Directory under the user config dir holding saved preferences
    fn preferences_dir_name(&self) -> &'static str {
        "create-next-app"
    }

    /// Environment variable overriding the pinned `next` version
    fn next_version_env(&self) -> &'static str {
        NEXT_VERSION_ENV
    }

    /// Project name offered when the user gives none
    fn default_project_name(&self) -> &'static str {
        "my-app"
    }

    /// Instructions printed after the project is created
    fn next_steps(&self, dir: &Path, package_manager: PackageManager, installed: bool) -> Vec<String> {
        let mut steps = Vec::new();
        if dir != Path::new(".") && !dir.as_os_str().is_empty() {
            steps.push(format!("cd {}", dir.display()));
        }
        if !installed {
            steps.push(package_manager.install_command());
        }
        steps.push(package_manager.run_command("dev"));
        steps
    }
}
