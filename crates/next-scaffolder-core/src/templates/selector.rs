//! Include/exclude glob patterns for template files

use super::types::InstallRequest;
use glob::Pattern;

/// Ordered list of glob patterns. Patterns starting with `!` exclude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPatterns {
    patterns: Vec<String>,
}

impl CopyPatterns {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Patterns for an install: everything, minus config files for tools the
    /// user turned off
    pub fn for_request(request: &InstallRequest) -> Self {
        let mut patterns = vec!["**".to_string()];
        if !request.linter.is_eslint() {
            patterns.push("!eslint.config.mjs".to_string());
        }
        if !request.linter.is_biome() {
            patterns.push("!biome.json".to_string());
        }
        if !request.tailwind {
            patterns.push("!postcss.config.mjs".to_string());
        }
        Self { patterns }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `file_name` should be copied. The first matching exclusion
    /// rejects the file; anything not excluded is included.
    pub fn should_copy(&self, file_name: &str) -> bool {
        should_copy_file(file_name, &self.patterns)
    }
}

/// Check a file name against an ordered include/exclude pattern list
pub fn should_copy_file(file_name: &str, patterns: &[String]) -> bool {
    for pattern in patterns {
        let Some(exclude) = pattern.strip_prefix('!') else {
            continue;
        };
        // An unparsable pattern can never match
        if Pattern::new(exclude).is_ok_and(|p| p.matches(file_name)) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::{
        InstallRequest, Linter, TemplateFamily, TemplateMode, TemplateSelection,
    };

    fn request() -> InstallRequest {
        InstallRequest::new(
            "my-app",
            "/tmp/my-app",
            TemplateSelection::new(TemplateFamily::App, TemplateMode::TypeScript),
        )
    }

    #[test]
    fn test_exclusion_rejects_matching_file() {
        let patterns = CopyPatterns::new(["**", "!eslint.config.mjs"]);
        assert!(!patterns.should_copy("eslint.config.mjs"));
        assert!(patterns.should_copy("page.tsx"));
    }

    #[test]
    fn test_glob_exclusions() {
        let patterns = CopyPatterns::new(["**", "!*.css"]);
        assert!(!patterns.should_copy("globals.css"));
        assert!(patterns.should_copy("layout.tsx"));
    }

    #[test]
    fn test_include_only_patterns_copy_everything() {
        let patterns = CopyPatterns::new(["**"]);
        assert!(patterns.should_copy("biome.json"));
        assert!(patterns.should_copy("gitignore"));
    }

    #[test]
    fn test_patterns_for_defaults_exclude_all_optional_configs() {
        let patterns = CopyPatterns::for_request(&request());
        assert_eq!(
            patterns.as_slice(),
            &["**", "!eslint.config.mjs", "!biome.json", "!postcss.config.mjs"]
        );
    }

    #[test]
    fn test_patterns_keep_enabled_tools() {
        let mut req = request();
        req.linter = Linter::Biome;
        req.tailwind = true;
        let patterns = CopyPatterns::for_request(&req);
        assert!(patterns.should_copy("biome.json"));
        assert!(patterns.should_copy("postcss.config.mjs"));
        assert!(!patterns.should_copy("eslint.config.mjs"));
    }
}
