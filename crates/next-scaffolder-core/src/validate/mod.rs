//! Input validation run before installation begins
//!
//! - Package name rules for the project name
//! - Import alias format
//! - Target directory writability and emptiness

pub mod directory;
pub mod name;

pub use directory::{
    check_writable, conflicting_files, ensure_safe_directory, is_folder_empty, DirectoryError,
};
pub use name::{is_valid_package_name, validate_npm_package_name, NameValidation};

/// Validate a project name typed at a prompt.
///
/// Empty input is accepted since the caller substitutes its default.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Ok(());
    }

    let result = validate_npm_package_name(name);
    if result.valid_for_new_packages {
        return Ok(());
    }
    Err(result
        .first_problem()
        .unwrap_or("invalid package name")
        .to_string())
}

/// Validate an import alias such as `@/*` or `~/*`.
///
/// Empty input is accepted since the caller substitutes the default.
pub fn validate_import_alias(alias: &str) -> Result<(), String> {
    if alias.is_empty() || alias.ends_with("/*") {
        Ok(())
    } else {
        Err("import alias must end with '/*'".to_string())
    }
}
