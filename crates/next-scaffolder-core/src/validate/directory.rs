//! Target directory checks run before anything is written

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Entries allowed to exist in a directory we still treat as empty
pub const ALLOWED_FILES: &[&str] = &[
    ".git",
    ".gitignore",
    ".gitkeep",
    "LICENSE",
    "license",
    "README.md",
    "readme.md",
];

/// Name of the probe file used to test write permission
const WRITE_PROBE: &str = ".write-test";

/// Reasons a directory cannot receive a new project
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory is not writable: {}", .0.display())]
    NotWritable(PathBuf),

    #[error("directory {} contains files that could conflict: {}", .path.display(), .files.join(", "))]
    Conflicting { path: PathBuf, files: Vec<String> },

    #[error("failed to check directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DirectoryError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf, DirectoryError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|e| DirectoryError::io(path, e))
}

/// Check that `path` can be used as an install target.
///
/// A missing path is fine (it gets created later). An existing directory is
/// probed by creating and removing a temporary file.
pub fn check_writable(path: &Path) -> Result<(), DirectoryError> {
    let path = absolute(path)?;

    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(DirectoryError::io(&path, e)),
    };

    if !metadata.is_dir() {
        return Err(DirectoryError::NotADirectory(path));
    }

    let probe = path.join(WRITE_PROBE);
    if fs::File::create(&probe).is_err() {
        return Err(DirectoryError::NotWritable(path));
    }
    if let Err(e) = fs::remove_file(&probe) {
        warn!(path = %probe.display(), error = %e, "could not remove write probe");
    }

    Ok(())
}

/// Entries in `path` that are not in [`ALLOWED_FILES`], sorted by name.
/// A missing directory has no conflicts.
pub fn conflicting_files(path: &Path) -> Result<Vec<String>, DirectoryError> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(DirectoryError::io(path, e)),
    };

    let mut conflicting = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DirectoryError::io(path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !ALLOWED_FILES.contains(&name.as_str()) {
            conflicting.push(name);
        }
    }
    conflicting.sort();
    Ok(conflicting)
}

/// Whether `path` is empty apart from allowlisted entries
pub fn is_folder_empty(path: &Path) -> Result<bool, DirectoryError> {
    Ok(conflicting_files(path)?.is_empty())
}

/// Run both checks, failing with the conflicting entries if there are any
pub fn ensure_safe_directory(path: &Path) -> Result<(), DirectoryError> {
    check_writable(path)?;
    let files = conflicting_files(path)?;
    if !files.is_empty() {
        return Err(DirectoryError::Conflicting {
            path: path.to_path_buf(),
            files,
        });
    }
    Ok(())
}
