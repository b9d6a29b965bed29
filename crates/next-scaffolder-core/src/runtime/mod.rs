//! Environment detection and package manager invocation
//!
//! This module provides:
//! - CI and network detection used to pick non-interactive defaults
//! - Dependency installation through the selected package manager

pub mod env;
pub mod install;

pub use env::{is_ci, is_ci_with, is_online, CI_ENV_VARS};
pub use install::install_dependencies;
