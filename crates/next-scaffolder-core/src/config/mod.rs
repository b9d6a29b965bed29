//! Project options, recommended defaults and saved preferences

pub mod preferences;

use crate::templates::types::{
    Bundler, InstallRequest, Linter, PackageManager, TemplateFamily, TemplateMode,
    TemplateSelection, DEFAULT_IMPORT_ALIAS,
};
use std::path::PathBuf;

pub use preferences::{Preferences, PreferencesStore};

/// Answers collected from flags, prompts and saved preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub typescript: bool,
    pub tailwind: bool,
    pub linter: Linter,
    pub src_dir: bool,
    pub import_alias: String,
    /// Minimal starter page
    pub empty: bool,
    /// Route handlers only, no React
    pub api: bool,
    pub bundler: Bundler,
    pub react_compiler: bool,
    pub package_manager: PackageManager,
    pub skip_install: bool,
    pub disable_git: bool,
}

impl Default for ProjectOptions {
    /// The recommended defaults
    fn default() -> Self {
        Self {
            typescript: true,
            tailwind: true,
            linter: Linter::Eslint,
            src_dir: false,
            import_alias: DEFAULT_IMPORT_ALIAS.to_string(),
            empty: false,
            api: false,
            bundler: Bundler::Turbopack,
            react_compiler: false,
            package_manager: PackageManager::Npm,
            skip_install: false,
            disable_git: false,
        }
    }
}

/// Values given explicitly on the command line; `None` means "not given"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub typescript: Option<bool>,
    pub tailwind: Option<bool>,
    pub linter: Option<Linter>,
    pub src_dir: Option<bool>,
    pub import_alias: Option<String>,
    pub empty: Option<bool>,
    pub api: Option<bool>,
    pub bundler: Option<Bundler>,
    pub react_compiler: Option<bool>,
    pub package_manager: Option<PackageManager>,
    pub skip_install: Option<bool>,
    pub disable_git: Option<bool>,
}

impl OptionOverrides {
    /// Whether any option was given explicitly
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrite every field of `options` that was given explicitly
    pub fn apply_to(&self, options: &mut ProjectOptions) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        set(&mut options.typescript, &self.typescript);
        set(&mut options.tailwind, &self.tailwind);
        set(&mut options.linter, &self.linter);
        set(&mut options.src_dir, &self.src_dir);
        set(&mut options.import_alias, &self.import_alias);
        set(&mut options.empty, &self.empty);
        set(&mut options.api, &self.api);
        set(&mut options.bundler, &self.bundler);
        set(&mut options.react_compiler, &self.react_compiler);
        set(&mut options.package_manager, &self.package_manager);
        set(&mut options.skip_install, &self.skip_install);
        set(&mut options.disable_git, &self.disable_git);
    }
}

impl ProjectOptions {
    /// Merge in priority order: defaults, then preferences, then flags
    pub fn merged(prefs: Option<&Preferences>, overrides: &OptionOverrides) -> Self {
        let mut options = Self::from_preferences(prefs);
        overrides.apply_to(&mut options);
        options
    }

    /// Defaults with saved preferences applied on top
    pub fn from_preferences(prefs: Option<&Preferences>) -> Self {
        let mut options = Self::default();
        if let Some(prefs) = prefs {
            prefs.apply_to(&mut options);
        }
        options
    }

    pub fn mode(&self) -> TemplateMode {
        if self.typescript {
            TemplateMode::TypeScript
        } else {
            TemplateMode::JavaScript
        }
    }

    pub fn selection(&self) -> TemplateSelection {
        TemplateSelection::new(
            TemplateFamily::resolve(self.api, self.tailwind, self.empty),
            self.mode(),
        )
    }

    /// Freeze the options into the request handed to the install pipeline
    pub fn into_request(
        self,
        app_name: impl Into<String>,
        root: impl Into<PathBuf>,
        next_version: impl Into<String>,
    ) -> InstallRequest {
        let template = self.selection();
        // API-only projects ship no stylesheets
        let tailwind = self.tailwind && !self.api;
        let import_alias = if self.import_alias.is_empty() {
            DEFAULT_IMPORT_ALIAS.to_string()
        } else {
            self.import_alias
        };
        InstallRequest {
            app_name: app_name.into(),
            root: root.into(),
            package_manager: self.package_manager,
            template,
            tailwind,
            linter: self.linter,
            src_dir: self.src_dir,
            import_alias,
            bundler: self.bundler,
            react_compiler: self.react_compiler,
            next_version: next_version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::package_json::PackageJson;

    #[test]
    fn test_recommended_defaults() {
        let options = ProjectOptions::default();
        let selection = options.selection();
        assert_eq!(selection.family, TemplateFamily::AppTw);
        assert_eq!(selection.mode, TemplateMode::TypeScript);
        assert_eq!(options.linter, Linter::Eslint);
        assert_eq!(options.import_alias, "@/*");
    }

    #[test]
    fn test_flags_win_over_preferences() {
        let prefs = Preferences {
            typescript: false,
            tailwind: false,
            src_dir: true,
            ..Default::default()
        };
        let overrides = OptionOverrides {
            typescript: Some(true),
            bundler: Some(Bundler::Rspack),
            ..Default::default()
        };
        assert!(!overrides.is_empty());

        let options = ProjectOptions::merged(Some(&prefs), &overrides);
        assert!(options.typescript);
        assert!(!options.tailwind);
        assert!(options.src_dir);
        assert_eq!(options.bundler, Bundler::Rspack);
    }

    #[test]
    fn test_no_preferences_no_flags_is_default() {
        assert!(OptionOverrides::default().is_empty());
        assert_eq!(
            ProjectOptions::merged(None, &OptionOverrides::default()),
            ProjectOptions::default()
        );
    }

    #[test]
    fn test_into_request() {
        let options = ProjectOptions {
            typescript: false,
            tailwind: false,
            api: true,
            import_alias: String::new(),
            ..Default::default()
        };
        let request = options.into_request("api", "/tmp/api", "15.0.0");
        assert_eq!(request.template.family, TemplateFamily::AppApi);
        assert_eq!(request.template.mode, TemplateMode::JavaScript);
        assert_eq!(request.import_alias, "@/*");
        assert_eq!(request.next_version, "15.0.0");
        assert!(request.is_api());
    }

    #[test]
    fn test_api_request_drops_tailwind() {
        let overrides = OptionOverrides {
            api: Some(true),
            ..Default::default()
        };
        let options = ProjectOptions::merged(None, &overrides);
        assert!(options.tailwind);

        let request = options.into_request("api", "/tmp/api", "15.0.0");
        assert_eq!(request.template.family, TemplateFamily::AppApi);
        assert!(!request.tailwind);

        let manifest = PackageJson::synthesize(&request);
        assert!(!manifest.dev_dependencies.contains_key("tailwindcss"));
        assert!(!manifest.dev_dependencies.contains_key("@tailwindcss/postcss"));
    }
}
