//! Saved answers from previous runs
//!
//! Stored as `preferences.json` in the user config directory so a later run
//! can offer "reuse previous settings".

use super::ProjectOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const PREFERENCES_FILE: &str = "preferences.json";

/// Persisted subset of [`ProjectOptions`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub typescript: bool,
    pub linter: String,
    pub tailwind: bool,
    pub app_router: bool,
    pub src_dir: bool,
    pub import_alias: String,
    pub customize_alias: bool,
    pub empty_template: bool,
    pub disable_git: bool,
    pub react_compiler: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from_options(&ProjectOptions::default())
    }
}

impl Preferences {
    /// Capture the answers worth remembering
    pub fn from_options(options: &ProjectOptions) -> Self {
        Self {
            typescript: options.typescript,
            linter: options.linter.name().to_string(),
            tailwind: options.tailwind,
            app_router: true,
            src_dir: options.src_dir,
            import_alias: options.import_alias.clone(),
            customize_alias: options.import_alias != crate::templates::DEFAULT_IMPORT_ALIAS,
            empty_template: options.empty,
            disable_git: options.disable_git,
            react_compiler: options.react_compiler,
        }
    }

    /// Overwrite the remembered fields of `options`
    pub fn apply_to(&self, options: &mut ProjectOptions) {
        options.typescript = self.typescript;
        // An unknown linter in an old file falls back to the current choice
        if let Ok(linter) = self.linter.parse() {
            options.linter = linter;
        }
        options.tailwind = self.tailwind;
        options.src_dir = self.src_dir;
        if !self.import_alias.is_empty() {
            options.import_alias = self.import_alias.clone();
        }
        options.empty = self.empty_template;
        options.disable_git = self.disable_git;
        options.react_compiler = self.react_compiler;
    }
}

/// Location of the preferences file
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    dir: PathBuf,
}

impl PreferencesStore {
    /// Store under `<user config dir>/<app_dir>`
    pub fn for_app(app_dir: &str) -> Result<Self> {
        let config_dir = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(Self::at(config_dir.join(app_dir)))
    }

    /// Store in an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    pub fn has(&self) -> bool {
        self.path().is_file()
    }

    /// Load saved preferences; `None` when nothing was saved yet
    pub fn load(&self) -> Result<Option<Preferences>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let prefs = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "loaded preferences");
        Ok(Some(prefs))
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;
        let path = self.path();
        let mut json =
            serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        json.push('\n');
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "saved preferences");
        Ok(())
    }

    /// Remove saved preferences; missing file is not an error
    pub fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path())
    }
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}
