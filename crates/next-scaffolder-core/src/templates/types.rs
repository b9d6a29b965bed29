//! Template selection and installation request types

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Import alias every bundled template is written against
pub const DEFAULT_IMPORT_ALIAS: &str = "@/*";

/// Error returned when a string does not name a known option value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl ParseError {
    fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Starter layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFamily {
    /// Standard App Router template
    App,
    /// API-only template (route handlers, no React components)
    AppApi,
    /// Minimal App Router template
    AppEmpty,
    /// App Router template with Tailwind CSS
    AppTw,
    /// Minimal App Router template with Tailwind CSS
    AppTwEmpty,
}

impl TemplateFamily {
    pub const ALL: [TemplateFamily; 5] = [
        TemplateFamily::App,
        TemplateFamily::AppApi,
        TemplateFamily::AppEmpty,
        TemplateFamily::AppTw,
        TemplateFamily::AppTwEmpty,
    ];

    /// Directory name of this family inside the template store
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateFamily::App => "app",
            TemplateFamily::AppApi => "app-api",
            TemplateFamily::AppEmpty => "app-empty",
            TemplateFamily::AppTw => "app-tw",
            TemplateFamily::AppTwEmpty => "app-tw-empty",
        }
    }

    /// Pick the family matching the user's answers. API-only wins over
    /// styling and minimal choices since it ships no UI at all.
    pub fn resolve(api: bool, tailwind: bool, empty: bool) -> Self {
        match (api, tailwind, empty) {
            (true, _, _) => TemplateFamily::AppApi,
            (false, true, true) => TemplateFamily::AppTwEmpty,
            (false, true, false) => TemplateFamily::AppTw,
            (false, false, true) => TemplateFamily::AppEmpty,
            (false, false, false) => TemplateFamily::App,
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, TemplateFamily::AppApi)
    }

    /// Whether the template uses the App Router (`app/page`) convention
    pub fn uses_app_router(&self) -> bool {
        self.dir_name().starts_with("app")
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for TemplateFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateFamily::ALL
            .into_iter()
            .find(|family| family.dir_name() == s)
            .ok_or_else(|| {
                ParseError::new(
                    "template",
                    s,
                    "app, app-api, app-empty, app-tw, app-tw-empty",
                )
            })
    }
}

/// Source language variant of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateMode {
    JavaScript,
    TypeScript,
}

impl TemplateMode {
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateMode::JavaScript => "js",
            TemplateMode::TypeScript => "ts",
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, TemplateMode::TypeScript)
    }

    /// Framework config file shipped with this mode
    pub fn next_config_file(&self) -> &'static str {
        match self {
            TemplateMode::JavaScript => "next.config.mjs",
            TemplateMode::TypeScript => "next.config.ts",
        }
    }

    /// Path-alias config file shipped with this mode
    pub fn paths_config_file(&self) -> &'static str {
        match self {
            TemplateMode::JavaScript => "jsconfig.json",
            TemplateMode::TypeScript => "tsconfig.json",
        }
    }

    /// Extension used by page components
    pub fn page_extension(&self) -> &'static str {
        match self {
            TemplateMode::JavaScript => "js",
            TemplateMode::TypeScript => "tsx",
        }
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for TemplateMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "js" | "javascript" => Ok(TemplateMode::JavaScript),
            "ts" | "typescript" => Ok(TemplateMode::TypeScript),
            _ => Err(ParseError::new("mode", s, "js, ts")),
        }
    }
}

/// A template family paired with a language mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateSelection {
    pub family: TemplateFamily,
    pub mode: TemplateMode,
}

impl TemplateSelection {
    pub fn new(family: TemplateFamily, mode: TemplateMode) -> Self {
        Self { family, mode }
    }

    /// Path of this selection's subtree inside the template store
    pub fn store_path(&self) -> String {
        format!("{}/{}", self.family.dir_name(), self.mode.dir_name())
    }
}

impl fmt::Display for TemplateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.family, self.mode)
    }
}

/// Get the store path of a given file in a template, e.g. `app/ts/next.config.ts`
pub fn get_template_file(selection: TemplateSelection, file: &str) -> String {
    format!("{}/{}", selection.store_path(), file)
}

/// Bundler used by the dev and build scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bundler {
    /// Framework default, no flag needed
    #[default]
    Turbopack,
    /// Traditional bundler, selected with `--webpack`
    Webpack,
    /// Rust-based bundler, injected through `next.config`
    Rspack,
}

impl Bundler {
    pub fn name(&self) -> &'static str {
        match self {
            Bundler::Turbopack => "turbopack",
            Bundler::Webpack => "webpack",
            Bundler::Rspack => "rspack",
        }
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Bundler {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "turbopack" => Ok(Bundler::Turbopack),
            "webpack" => Ok(Bundler::Webpack),
            "rspack" => Ok(Bundler::Rspack),
            _ => Err(ParseError::new("bundler", s, "turbopack, webpack, rspack")),
        }
    }
}

/// Linter wired into the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Linter {
    #[default]
    Eslint,
    Biome,
    None,
}

impl Linter {
    pub fn name(&self) -> &'static str {
        match self {
            Linter::Eslint => "eslint",
            Linter::Biome => "biome",
            Linter::None => "none",
        }
    }

    pub fn is_eslint(&self) -> bool {
        matches!(self, Linter::Eslint)
    }

    pub fn is_biome(&self) -> bool {
        matches!(self, Linter::Biome)
    }
}

impl fmt::Display for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Linter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eslint" => Ok(Linter::Eslint),
            "biome" => Ok(Linter::Biome),
            "none" | "" => Ok(Linter::None),
            _ => Err(ParseError::new("linter", s, "eslint, biome, none")),
        }
    }
}

/// Package manager the generated project is set up for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Detect the package manager that launched us from `npm_config_user_agent`,
    /// e.g. `pnpm/9.1.0 npm/? node/v20.11.0 darwin arm64`
    pub fn from_user_agent(user_agent: &str) -> Self {
        match user_agent.split('/').next().unwrap_or_default() {
            "pnpm" => PackageManager::Pnpm,
            "yarn" => PackageManager::Yarn,
            "bun" => PackageManager::Bun,
            _ => PackageManager::Npm,
        }
    }

    /// Detect from the environment, defaulting to npm
    pub fn from_env() -> Self {
        std::env::var("npm_config_user_agent")
            .map(|ua| Self::from_user_agent(&ua))
            .unwrap_or_default()
    }

    /// Program and arguments that install a project's dependencies
    pub fn install_args(&self) -> (&'static str, &'static [&'static str]) {
        (self.name(), &["install"])
    }

    /// Human-readable install command, e.g. `pnpm install`
    pub fn install_command(&self) -> String {
        let (program, args) = self.install_args();
        format!("{} {}", program, args.join(" "))
    }

    /// Command that runs a package script, e.g. `npm run dev` or `yarn dev`
    pub fn run_command(&self, script: &str) -> String {
        match self {
            PackageManager::Npm | PackageManager::Bun => format!("{} run {}", self.name(), script),
            PackageManager::Pnpm | PackageManager::Yarn => format!("{} {}", self.name(), script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PackageManager {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(ParseError::new("package manager", s, "npm, pnpm, yarn, bun")),
        }
    }
}

/// Everything the install pipeline needs, fully resolved by the caller.
///
/// The pipeline only reads from this value; it never writes answers back.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    /// Name written into `package.json`
    pub app_name: String,
    /// Target directory
    pub root: PathBuf,
    pub package_manager: PackageManager,
    pub template: TemplateSelection,
    pub tailwind: bool,
    pub linter: Linter,
    /// Move `app/`, `pages/` and `styles/` under `src/`
    pub src_dir: bool,
    pub import_alias: String,
    pub bundler: Bundler,
    pub react_compiler: bool,
    /// Version pinned for `next` and its companion packages
    pub next_version: String,
}

impl InstallRequest {
    pub fn new(app_name: impl Into<String>, root: impl Into<PathBuf>, template: TemplateSelection) -> Self {
        Self {
            app_name: app_name.into(),
            root: root.into(),
            package_manager: PackageManager::default(),
            template,
            tailwind: false,
            linter: Linter::None,
            src_dir: false,
            import_alias: DEFAULT_IMPORT_ALIAS.to_string(),
            bundler: Bundler::default(),
            react_compiler: false,
            next_version: crate::templates::package_json::DEFAULT_NEXT_VERSION.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_api(&self) -> bool {
        self.template.family.is_api()
    }

    pub fn mode(&self) -> TemplateMode {
        self.template.mode
    }
}
