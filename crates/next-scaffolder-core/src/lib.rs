//! Next Scaffolder Core - library behind the `better-next-app` CLI
//!
//! This library turns a fully resolved [`InstallRequest`] into a ready-to-run
//! Next.js project on disk. It can be driven by the bundled cliclack front end
//! or by any other caller that assembles the request itself.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template stores, file selection, copying,
//!   config rewrites, `src/` layout and `package.json` synthesis
//! - **Layer 2: Inputs** - Name and directory validation, recommended defaults,
//!   saved preferences, CI detection and the `ProductConfig` trait
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use next_scaffolder_core::templates::{
//!     install_template, InstallRequest, MemoryStore, TemplateFamily, TemplateMode,
//!     TemplateSelection,
//! };
//!
//! let selection = TemplateSelection::new(TemplateFamily::AppTw, TemplateMode::TypeScript);
//! let request = InstallRequest::new("my-app", "/tmp/my-app", selection);
//! let report = install_template(&MemoryStore::embedded(), &request)?;
//! println!("{} files", report.copied_files.len());
//! ```

pub mod config;
pub mod product;
pub mod runtime;
pub mod templates;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{OptionOverrides, Preferences, PreferencesStore, ProjectOptions};
pub use product::ProductConfig;
pub use runtime::is_ci;
pub use templates::{
    install_template, Bundler, InstallReport, InstallRequest, Linter, MemoryStore,
    PackageManager, TemplateFamily, TemplateMode, TemplateSelection, TemplateStore,
};

#[cfg(feature = "tui")]
pub use tui::run;

/// Fallback CLI version for binaries that do not define their own
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
