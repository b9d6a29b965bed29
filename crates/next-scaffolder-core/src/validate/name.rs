//! npm package name validation
//!
//! Every rule is checked independently so the caller sees all problems at
//! once. Hard problems land in `errors`; problems that only matter for newly
//! published packages land in `warnings`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Maximum length of a package name accepted for new packages
pub const MAX_NAME_LENGTH: usize = 214;

/// Characters left as-is when escaping a single URL path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

const SPECIAL_CHARS: &[char] = &['~', ')', '(', '\'', '!', '*'];

/// Node.js core modules and other names the registry refuses
const RESERVED_NAMES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "favicon.ico",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "node_modules",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Outcome of validating a package name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    /// Passes every rule, including the ones for newly published packages
    pub valid_for_new_packages: bool,
    /// Passes the rules that existing packages were held to
    pub valid_for_old_packages: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl NameValidation {
    fn error(&mut self, message: &str) {
        self.valid_for_new_packages = false;
        self.valid_for_old_packages = false;
        self.errors.push(message.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.valid_for_new_packages = false;
        self.warnings.push(message.to_string());
    }

    /// First problem worth showing to a user, errors before warnings
    pub fn first_problem(&self) -> Option<&str> {
        self.errors
            .first()
            .or_else(|| self.warnings.first())
            .map(String::as_str)
    }
}

fn is_url_safe(name: &str) -> bool {
    utf8_percent_encode(name, PATH_SEGMENT).to_string() == name
}

/// Validate `name` against npm's package naming rules
pub fn validate_npm_package_name(name: &str) -> NameValidation {
    let mut result = NameValidation {
        valid_for_new_packages: true,
        valid_for_old_packages: true,
        ..Default::default()
    };

    if name.is_empty() {
        result.error("name length must be greater than zero");
        return result;
    }

    if name.len() > MAX_NAME_LENGTH {
        result.warning("name can no longer contain more than 214 characters");
    }

    if name.trim() != name {
        result.error("name cannot contain leading or trailing spaces");
    }

    let scoped = name.starts_with('@');
    let mut package_name = name;
    if scoped {
        match name.split_once('/') {
            Some((scope, rest)) => {
                package_name = rest;
                if scope.len() <= 1 {
                    result.error("scope name cannot be empty");
                }
                if rest.is_empty() {
                    result.error("package name after scope cannot be empty");
                }
            }
            None => {
                result.error("scoped package name must include a package name after the scope")
            }
        }
    } else if package_name.starts_with('.') || package_name.starts_with('_') {
        result.error("name cannot start with a period or underscore");
    }

    if name.chars().any(char::is_uppercase) {
        result.warning("name can no longer contain capital letters");
    }

    if name.contains(' ') {
        result.error("name cannot contain spaces");
    }

    if name.contains(SPECIAL_CHARS) {
        result.error("name can only contain URL-friendly characters");
    }

    // `@` and `/` are allowed for the scope separator only
    let unscoped: String = name.chars().filter(|c| *c != '@' && *c != '/').collect();
    if !is_url_safe(&unscoped) {
        result.error("name can only contain URL-friendly characters");
    }

    if RESERVED_NAMES.contains(&package_name.to_lowercase().as_str()) {
        result.error("name cannot be a core module or reserved name");
    }

    result
}

/// Whether `name` is usable for a new package
pub fn is_valid_package_name(name: &str) -> bool {
    validate_npm_package_name(name).valid_for_new_packages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in [
            "some-package",
            "example.com",
            "under_score",
            "123numeric",
            "@npm/thingy",
            "@jane/foo.js",
            "my-app",
            "react-dom",
            "lodash",
            "a+b",
            "a=b",
            "a:b",
            "a$b",
            "a&b",
        ] {
            let result = validate_npm_package_name(name);
            assert!(result.valid_for_new_packages, "{} should be valid", name);
            assert!(result.valid_for_old_packages, "{} should be valid", name);
            assert!(result.errors.is_empty(), "{}: {:?}", name, result.errors);
            assert!(result.warnings.is_empty(), "{}: {:?}", name, result.warnings);
        }
    }

    #[test]
    fn test_invalid_names() {
        for (name, expected) in [
            ("", "name length must be greater than zero"),
            ("excited!", "name can only contain URL-friendly characters"),
            (" leading-space", "name cannot contain leading or trailing spaces"),
            ("trailing-space ", "name cannot contain leading or trailing spaces"),
            (".start-with-dot", "name cannot start with a period or underscore"),
            ("_start-with-underscore", "name cannot start with a period or underscore"),
            ("has spaces", "name cannot contain spaces"),
            ("has~tilde", "name can only contain URL-friendly characters"),
            ("has(parens)", "name can only contain URL-friendly characters"),
            ("has'quote", "name can only contain URL-friendly characters"),
            ("has*asterisk", "name can only contain URL-friendly characters"),
            ("ünicode", "name can only contain URL-friendly characters"),
            ("a?b", "name can only contain URL-friendly characters"),
            ("a;b", "name can only contain URL-friendly characters"),
            ("a,b", "name can only contain URL-friendly characters"),
            ("a#b", "name can only contain URL-friendly characters"),
            ("http", "name cannot be a core module or reserved name"),
            ("Stream", "name cannot be a core module or reserved name"),
            ("node_modules", "name cannot be a core module or reserved name"),
            ("favicon.ico", "name cannot be a core module or reserved name"),
            ("@scope/fs", "name cannot be a core module or reserved name"),
        ] {
            let result = validate_npm_package_name(name);
            assert!(!result.valid_for_new_packages, "{:?} should be invalid", name);
            assert!(!result.valid_for_old_packages, "{:?} should be invalid", name);
            assert!(
                result.errors.iter().any(|e| e == expected),
                "{:?}: expected {:?} in {:?}",
                name,
                expected,
                result.errors
            );
        }
    }

    #[test]
    fn test_empty_name_short_circuits() {
        let result = validate_npm_package_name("");
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_uppercase_is_only_a_warning() {
        for name in ["UpperCase", "MixedCase-Package"] {
            let result = validate_npm_package_name(name);
            assert!(!result.valid_for_new_packages);
            assert!(result.valid_for_old_packages);
            assert!(result.errors.is_empty());
            assert_eq!(result.warnings, vec!["name can no longer contain capital letters"]);
        }
    }

    #[test]
    fn test_too_long_is_only_a_warning() {
        let result = validate_npm_package_name(&"a".repeat(215));
        assert!(!result.valid_for_new_packages);
        assert!(result.valid_for_old_packages);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);

        assert!(is_valid_package_name(&"a".repeat(214)));
    }

    #[test]
    fn test_scoped_packages() {
        for name in ["@scope/package", "@scope/package-name", "@my-org/my-package"] {
            assert!(is_valid_package_name(name), "{} should be valid", name);
        }
        for name in ["@", "@scope", "@scope/", "@/package"] {
            let result = validate_npm_package_name(name);
            assert!(!result.valid_for_new_packages, "{} should be invalid", name);
            assert!(!result.errors.is_empty(), "{} should have errors", name);
        }
    }

    #[test]
    fn test_collects_every_violation() {
        let result = validate_npm_package_name(" Has Space!");
        assert!(result.errors.len() >= 3, "{:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_first_problem() {
        assert_eq!(
            validate_npm_package_name("Bad Name").first_problem(),
            Some("name cannot contain spaces")
        );
        assert_eq!(
            validate_npm_package_name("Upper").first_problem(),
            Some("name can no longer contain capital letters")
        );
        assert_eq!(validate_npm_package_name("fine").first_problem(), None);
    }
}
