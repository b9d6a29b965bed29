//! Read-only template storage
//!
//! The installer never touches the filesystem to read templates directly.
//! It goes through [`TemplateStore`], which has three implementations:
//! - [`MemoryStore`]: files held in memory (bundled assets, zip archives, tests)
//! - [`LocalStore`]: a template directory on disk (for development use)
//! - [`MemoryStore::embedded`]: the templates compiled into the binary

use super::embedded;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A single entry returned by [`TemplateStore::read_dir`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StoreEntry {
    pub name: String,
    pub is_dir: bool,
}

impl StoreEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Content provider for template trees.
///
/// Paths are `/`-separated and relative to the store root, e.g. `app/ts/app`.
pub trait TemplateStore {
    /// List the immediate children of a directory, sorted by name
    fn read_dir(&self, path: &str) -> Result<Vec<StoreEntry>>;

    /// Read the full contents of a file
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// In-memory template tree keyed by relative file path
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, Cow<'static, [u8]>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by the templates compiled into the binary
    pub fn embedded() -> Self {
        let files = embedded::FILES
            .iter()
            .map(|(path, bytes)| (path.to_string(), Cow::Borrowed(*bytes)))
            .collect();
        Self { files }
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl AsRef<str>, contents: impl Into<Vec<u8>>) {
        self.files.insert(
            normalize(path.as_ref()).to_string(),
            Cow::Owned(contents.into()),
        );
    }

    /// Builder-style [`MemoryStore::insert`]
    pub fn with_file(mut self, path: impl AsRef<str>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// All file paths in the store, sorted
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl TemplateStore for MemoryStore {
    fn read_dir(&self, path: &str) -> Result<Vec<StoreEntry>> {
        let dir = normalize(path);
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir)
        };

        let mut entries = BTreeSet::new();
        for key in self.files.range(prefix.clone()..).map(|(k, _)| k) {
            let Some(rest) = key.strip_prefix(&prefix) else {
                break;
            };
            match rest.split_once('/') {
                Some((child, _)) => entries.insert(StoreEntry::dir(child)),
                None => entries.insert(StoreEntry::file(rest)),
            };
        }

        if entries.is_empty() {
            anyhow::bail!("Template directory '{}' not found", dir);
        }

        Ok(entries.into_iter().collect())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .get(normalize(path))
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| anyhow::anyhow!("Template file '{}' not found", path))
    }
}

/// Template tree read straight from a directory on disk
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        normalize(path)
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}

impl TemplateStore for LocalStore {
    fn read_dir(&self, path: &str) -> Result<Vec<StoreEntry>> {
        let dir = self.resolve(path);
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .with_context(|| format!("Failed to read template directory {}", dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Failed to read template directory {}", dir.display()))?;
            let is_dir = entry
                .file_type()
                .with_context(|| format!("Failed to inspect {}", entry.path().display()))?
                .is_dir();
            entries.push(StoreEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        entries.sort();
        Ok(entries)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let file = self.resolve(path);
        std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))
    }
}

impl<S: TemplateStore + ?Sized> TemplateStore for Box<S> {
    fn read_dir(&self, path: &str) -> Result<Vec<StoreEntry>> {
        (**self).read_dir(path)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::{TemplateFamily, TemplateMode, TemplateSelection};

    fn sample_store() -> MemoryStore {
        MemoryStore::new()
            .with_file("app/ts/package.json", "{}")
            .with_file("app/ts/app/page.tsx", "page")
            .with_file("app/ts/app/layout.tsx", "layout")
            .with_file("app/ts/public/next.svg", "<svg/>")
            .with_file("app-tw/ts/app/page.tsx", "tw page")
    }

    #[test]
    fn test_read_dir_lists_immediate_children() {
        let store = sample_store();
        let entries = store.read_dir("app/ts").unwrap();
        assert_eq!(
            entries,
            vec![
                StoreEntry::dir("app"),
                StoreEntry::file("package.json"),
                StoreEntry::dir("public"),
            ]
        );
    }

    #[test]
    fn test_read_dir_does_not_leak_sibling_prefixes() {
        // "app/" must not match keys under "app-tw/"
        let store = sample_store();
        let root = store.read_dir("").unwrap();
        assert_eq!(root, vec![StoreEntry::dir("app"), StoreEntry::dir("app-tw")]);
        let app = store.read_dir("app").unwrap();
        assert_eq!(app, vec![StoreEntry::dir("ts")]);
    }

    #[test]
    fn test_read_missing_paths() {
        let store = sample_store();
        assert!(store.read_dir("pages/ts").is_err());
        assert!(store.read_file("app/ts/missing.txt").is_err());
        assert_eq!(store.read_file("/app/ts/app/page.tsx/").unwrap(), b"page");
    }

    #[test]
    fn test_embedded_store_has_every_selection() {
        let store = MemoryStore::embedded();
        for family in TemplateFamily::ALL {
            for mode in [TemplateMode::TypeScript, TemplateMode::JavaScript] {
                let selection = TemplateSelection::new(family, mode);
                let entries = store.read_dir(&selection.store_path()).unwrap();
                assert!(entries.iter().any(|e| e.name == mode.next_config_file()));
                assert!(entries.iter().any(|e| e.name == mode.paths_config_file()));
                assert!(entries.iter().any(|e| e.name == "gitignore"));
            }
        }
    }

    #[test]
    fn test_local_store_reads_disk() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("app/js/app")).unwrap();
        std::fs::write(temp.path().join("app/js/app/page.js"), "hello").unwrap();
        std::fs::write(temp.path().join("app/js/jsconfig.json"), "{}").unwrap();

        let store = LocalStore::new(temp.path());
        let entries = store.read_dir("app/js").unwrap();
        assert_eq!(
            entries,
            vec![StoreEntry::dir("app"), StoreEntry::file("jsconfig.json")]
        );
        assert_eq!(store.read_file("app/js/app/page.js").unwrap(), b"hello");
    }
}
