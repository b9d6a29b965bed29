//! Literal text rewrites applied to freshly copied template files
//!
//! The bundled templates are fully known at build time, so these edits are
//! plain substring replacements against exact template content rather than
//! structural edits. If a template changes, the strings below must follow.

use super::types::{TemplateMode, DEFAULT_IMPORT_ALIAS};
use anyhow::{Context, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const NEXT_CONFIG_EXPORT: &str = "export default nextConfig;";
const RSPACK_EXPORT: &str = "export default withRspack(nextConfig);";
const RSPACK_IMPORT: &str = "import withRspack from \"next-rspack\";\n\n";

const CONFIG_PLACEHOLDER: &str = "/* config options here */\n";
const REACT_COMPILER_OPTION: &str = "  reactCompiler: true,\n";

const ROOT_PATHS_ENTRY: &str = r#""@/*": ["./*"]"#;
const SRC_PATHS_ENTRY: &str = r#""@/*": ["./src/*"]"#;
const DEFAULT_ALIAS_KEY: &str = r#""@/*":"#;

/// Files never touched by the import alias rewrite
const ALIAS_EXCLUDES: &[&str] = &[
    "tsconfig.json",
    "jsconfig.json",
    ".git/**/*",
    "**/fonts/**",
    "**/favicon.ico",
];

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_config(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Wrap the exported Next config with `withRspack(...)`.
///
/// Fails when the config does not end in the exact export statement the
/// templates ship with.
pub fn inject_rspack(root: &Path, mode: TemplateMode) -> Result<()> {
    let config_path = root.join(mode.next_config_file());
    let content = read_config(&config_path)?;

    if !content.contains(NEXT_CONFIG_EXPORT) {
        anyhow::bail!(
            "'{}' not found in {}",
            NEXT_CONFIG_EXPORT,
            config_path.display()
        );
    }

    let new_content = format!(
        "{}{}",
        RSPACK_IMPORT,
        content.replacen(NEXT_CONFIG_EXPORT, RSPACK_EXPORT, 1)
    );
    write_config(&config_path, &new_content)?;
    debug!(file = %config_path.display(), "injected rspack wrapper");
    Ok(())
}

/// Turn on the React Compiler right below the config placeholder comment
pub fn inject_react_compiler(root: &Path, mode: TemplateMode) -> Result<()> {
    let config_path = root.join(mode.next_config_file());
    let content = read_config(&config_path)?;

    let new_content = content.replacen(
        CONFIG_PLACEHOLDER,
        &format!("{}{}", CONFIG_PLACEHOLDER, REACT_COMPILER_OPTION),
        1,
    );
    write_config(&config_path, &new_content)?;
    debug!(file = %config_path.display(), "enabled react compiler");
    Ok(())
}

/// Point the `paths` entry at `src/` when requested and rename its key to
/// the chosen alias
pub fn update_config_paths(
    root: &Path,
    mode: TemplateMode,
    src_dir: bool,
    import_alias: &str,
) -> Result<()> {
    let config_path = root.join(mode.paths_config_file());
    let mut content = read_config(&config_path)?;

    if src_dir {
        content = content.replacen(ROOT_PATHS_ENTRY, SRC_PATHS_ENTRY, 1);
    }
    content = content.replacen(DEFAULT_ALIAS_KEY, &format!("\"{}\":", import_alias), 1);

    write_config(&config_path, &content)
}

/// The prefix imports are rewritten to: the alias without its trailing `*`
pub fn alias_prefix(import_alias: &str) -> &str {
    import_alias.strip_suffix('*').unwrap_or(import_alias)
}

fn is_alias_excluded(relative: &str) -> bool {
    ALIAS_EXCLUDES
        .iter()
        .any(|pattern| Pattern::new(pattern).is_ok_and(|p| p.matches(relative)))
}

/// Replace every `@/` in the generated tree with the custom alias prefix.
///
/// Only files whose content changes are written back; their permissions are
/// kept. Returns the rewritten paths, relative to `root`.
pub fn update_import_aliases(root: &Path, import_alias: &str) -> Result<Vec<String>> {
    let replacement = alias_prefix(import_alias);
    let mut rewritten = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .context("Walked outside the project directory")?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if is_alias_excluded(&relative) {
            continue;
        }

        let content = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;

        let new_content = replace_bytes(&content, b"@/", replacement.as_bytes());
        if let Some(new_content) = new_content.filter(|c| *c != content) {
            let permissions = entry
                .metadata()
                .with_context(|| format!("Failed to inspect {}", entry.path().display()))?
                .permissions();
            fs::write(entry.path(), new_content)
                .with_context(|| format!("Failed to write {}", entry.path().display()))?;
            fs::set_permissions(entry.path(), permissions).with_context(|| {
                format!("Failed to restore permissions on {}", entry.path().display())
            })?;
            debug!(file = %relative, "rewrote import alias");
            rewritten.push(relative);
        }
    }

    Ok(rewritten)
}

/// Replace every occurrence of `from`; `None` when there is none
fn replace_bytes(content: &[u8], from: &[u8], to: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(content.len());
    let mut rest = content;
    let mut found = false;
    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
        found = true;
    }
    if !found {
        return None;
    }
    out.extend_from_slice(rest);
    Some(out)
}

/// Whether the alias differs from the one templates are written against
pub fn is_custom_alias(import_alias: &str) -> bool {
    import_alias != DEFAULT_IMPORT_ALIAS
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS_CONFIG: &str = "import type { NextConfig } from \"next\";\n\nconst nextConfig: NextConfig = {\n  /* config options here */\n};\n\nexport default nextConfig;\n";

    const TSCONFIG_JSON: &str = "{\n  \"compilerOptions\": {\n    \"paths\": {\n      \"@/*\": [\"./*\"]\n    }\n  }\n}\n";

    #[test]
    fn test_inject_rspack() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("next.config.ts"), TS_CONFIG).unwrap();

        inject_rspack(temp.path(), TemplateMode::TypeScript).unwrap();

        let content = fs::read_to_string(temp.path().join("next.config.ts")).unwrap();
        assert!(content.starts_with("import withRspack from \"next-rspack\";\n\nimport type"));
        assert!(content.ends_with("export default withRspack(nextConfig);\n"));
        assert!(!content.contains("export default nextConfig;"));
    }

    #[test]
    fn test_inject_rspack_requires_known_export() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join("next.config.mjs"),
            "module.exports = {};\n",
        )
        .unwrap();

        let err = inject_rspack(temp.path(), TemplateMode::JavaScript).unwrap_err();
        assert!(err.to_string().contains("export default nextConfig;"));
    }

    #[test]
    fn test_inject_rspack_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        assert!(inject_rspack(temp.path(), TemplateMode::TypeScript).is_err());
    }

    #[test]
    fn test_inject_react_compiler() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("next.config.ts"), TS_CONFIG).unwrap();

        inject_react_compiler(temp.path(), TemplateMode::TypeScript).unwrap();

        let content = fs::read_to_string(temp.path().join("next.config.ts")).unwrap();
        assert!(content.contains("  /* config options here */\n  reactCompiler: true,\n};"));
    }

    #[test]
    fn test_update_config_paths_src_dir_and_alias() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("tsconfig.json"), TSCONFIG_JSON).unwrap();

        update_config_paths(temp.path(), TemplateMode::TypeScript, true, "~/*").unwrap();

        let content = fs::read_to_string(temp.path().join("tsconfig.json")).unwrap();
        assert!(content.contains(r#""~/*": ["./src/*"]"#));
        assert!(!content.contains("@/*"));
    }

    #[test]
    fn test_update_config_paths_default_is_noop() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("jsconfig.json"), TSCONFIG_JSON).unwrap();

        update_config_paths(temp.path(), TemplateMode::JavaScript, false, "@/*").unwrap();

        let content = fs::read_to_string(temp.path().join("jsconfig.json")).unwrap();
        assert_eq!(content, TSCONFIG_JSON);
    }

    #[test]
    fn test_alias_prefix() {
        assert_eq!(alias_prefix("@/*"), "@/");
        assert_eq!(alias_prefix("~/*"), "~/");
        assert_eq!(alias_prefix("#app"), "#app");
        assert!(!is_custom_alias("@/*"));
        assert!(is_custom_alias("@app/*"));
    }

    #[test]
    fn test_alias_exclusions() {
        assert!(is_alias_excluded("tsconfig.json"));
        assert!(is_alias_excluded(".git/HEAD"));
        assert!(is_alias_excluded("app/fonts/GeistVF.woff"));
        assert!(is_alias_excluded("app/favicon.ico"));
        assert!(!is_alias_excluded("app/page.tsx"));
    }

    #[test]
    fn test_update_import_aliases() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("app")).unwrap();
        fs::write(root.join("tsconfig.json"), TSCONFIG_JSON).unwrap();
        fs::write(
            root.join("app/page.tsx"),
            "import { Button } from \"@/components/button\";\n",
        )
        .unwrap();
        fs::write(root.join("app/globals.css"), "body {}\n").unwrap();

        let rewritten = update_import_aliases(root, "~/*").unwrap();

        assert_eq!(rewritten, vec!["app/page.tsx".to_string()]);
        assert_eq!(
            fs::read_to_string(root.join("app/page.tsx")).unwrap(),
            "import { Button } from \"~/components/button\";\n"
        );
        // Path config is handled separately and left alone here
        assert_eq!(
            fs::read_to_string(root.join("tsconfig.json")).unwrap(),
            TSCONFIG_JSON
        );
    }

    #[test]
    fn test_update_import_aliases_rewrites_non_utf8_files() {
        let temp = tempfile::tempdir().unwrap();
        let data = temp.path().join("data.bin");
        fs::write(&data, b"\xff\xfe@/lib\x00@/").unwrap();
        fs::write(temp.path().join("plain.bin"), b"\xff\x00").unwrap();

        let rewritten = update_import_aliases(temp.path(), "~/*").unwrap();

        assert_eq!(rewritten, vec!["data.bin".to_string()]);
        assert_eq!(fs::read(&data).unwrap(), b"\xff\xfe~/lib\x00~/");
    }

    #[test]
    fn test_replace_bytes() {
        assert_eq!(replace_bytes(b"a@/b@/", b"@/", b"#"), Some(b"a#b#".to_vec()));
        assert_eq!(replace_bytes(b"@", b"@/", b"#"), None);
        assert_eq!(replace_bytes(b"", b"@/", b"#"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_update_import_aliases_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let script = temp.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\necho @/lib\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        update_import_aliases(temp.path(), "#/*").unwrap();

        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(fs::read_to_string(&script).unwrap(), "#!/bin/sh\necho #/lib\n");
    }
}
