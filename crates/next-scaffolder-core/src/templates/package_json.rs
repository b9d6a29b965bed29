//! `package.json` synthesis for the generated project
//!
//! The manifest is assembled entirely in memory and written in one go.
//! Dependency sections are `BTreeMap`s so their keys always serialize in
//! sorted order, whatever order they were added in.

use super::types::{Bundler, InstallRequest, PackageManager};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// React version paired with the pinned Next.js release
pub const NEXTJS_REACT_PEER_VERSION: &str = "19.2.3";

/// Version written for `next` when no override is set
pub const DEFAULT_NEXT_VERSION: &str = "latest";

/// Environment variable overriding the pinned `next` version
pub const NEXT_VERSION_ENV: &str = "NEXT_PRIVATE_TEST_VERSION";

const PROJECT_VERSION: &str = "0.1.0";
const BIOME_VERSION: &str = "2.2.0";
const REACT_COMPILER_VERSION: &str = "1.0.0";

/// Native packages whose install scripts need an explicit decision
const NATIVE_BUILD_PACKAGES: &[&str] = &["sharp", "unrs-resolver"];

/// Workspace file written next to `package.json` for pnpm
pub const PNPM_WORKSPACE: &str = "packages:
  - .
ignoredBuiltDependencies:
  - sharp
  - unrs-resolver
";

/// Read the `next` version override, falling back to [`DEFAULT_NEXT_VERSION`]
pub fn next_version_from_env(var: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NEXT_VERSION.to_string())
}

/// The generated project's `package.json`.
///
/// Fields are declared in key order and every map is a `BTreeMap`, so the
/// output is sorted at every level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_scripts: Option<Vec<String>>,
    pub name: String,
    pub private: bool,
    pub scripts: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_dependencies: Option<Vec<String>>,
    pub version: String,
}

impl PackageJson {
    /// Build the manifest for an install request
    pub fn synthesize(request: &InstallRequest) -> Self {
        let version = request.next_version.as_str();
        let is_api = request.is_api();

        let bundler_flag = match request.bundler {
            Bundler::Webpack => " --webpack",
            // Turbopack is the default and rspack is wired in through next.config
            Bundler::Turbopack | Bundler::Rspack => "",
        };

        let mut scripts = BTreeMap::new();
        let mut set_script = |name: &str, command: String| {
            scripts.insert(name.to_string(), command);
        };
        set_script("dev", format!("next dev{}", bundler_flag));
        set_script("build", format!("next build{}", bundler_flag));
        set_script("start", "next start".to_string());
        if request.linter.is_eslint() {
            set_script("lint", "eslint".to_string());
        }
        if request.linter.is_biome() {
            set_script("lint", "biome check".to_string());
            set_script("format", "biome format --write".to_string());
        }

        let mut dependencies = BTreeMap::new();
        dependencies.insert("react".to_string(), NEXTJS_REACT_PEER_VERSION.to_string());
        dependencies.insert("react-dom".to_string(), NEXTJS_REACT_PEER_VERSION.to_string());
        dependencies.insert("next".to_string(), version.to_string());

        let mut dev_dependencies = BTreeMap::new();
        let mut add_dev = |name: &str, version: &str| {
            dev_dependencies.insert(name.to_string(), version.to_string());
        };

        if request.bundler == Bundler::Rspack {
            dependencies.insert("next-rspack".to_string(), version.to_string());
        }

        if request.react_compiler {
            add_dev("babel-plugin-react-compiler", REACT_COMPILER_VERSION);
        }

        if request.mode().is_typed() {
            add_dev("typescript", "^5");
            add_dev("@types/node", "^20");
            add_dev("@types/react", "^19");
            add_dev("@types/react-dom", "^19");
        }

        if request.tailwind {
            add_dev("@tailwindcss/postcss", "^4");
            add_dev("tailwindcss", "^4");
        }

        if request.linter.is_eslint() {
            add_dev("eslint", "^9");
            add_dev("eslint-config-next", version);
        }

        if request.linter.is_biome() {
            add_dev("@biomejs/biome", BIOME_VERSION);
        }

        // API-only projects ship no React and no front-end lint config
        if is_api {
            dependencies.remove("react");
            dependencies.remove("react-dom");
            dev_dependencies.remove("@types/react-dom");
            scripts.remove("lint");
            scripts.remove("format");
        }

        let (ignore_scripts, trusted_dependencies) = match request.package_manager {
            PackageManager::Bun => {
                let packages: Vec<String> =
                    NATIVE_BUILD_PACKAGES.iter().map(|p| p.to_string()).collect();
                (Some(packages.clone()), Some(packages))
            }
            _ => (None, None),
        };

        Self {
            dependencies,
            dev_dependencies,
            ignore_scripts,
            name: request.app_name.clone(),
            private: true,
            scripts,
            trusted_dependencies,
            version: PROJECT_VERSION.to_string(),
        }
    }

    /// Serialize with 2-space indentation and a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).context("Failed to serialize package.json")?;
        json.push('\n');
        Ok(json)
    }
}

/// Write `package.json` (and `pnpm-workspace.yaml` for pnpm) into the project root
pub fn write_package_json(request: &InstallRequest) -> Result<PackageJson> {
    let root = request.root();
    let package_json = PackageJson::synthesize(request);

    if request.package_manager == PackageManager::Pnpm {
        write_file(&root.join("pnpm-workspace.yaml"), PNPM_WORKSPACE)?;
    }

    write_file(&root.join("package.json"), &package_json.to_json_string()?)?;
    debug!(
        dependencies = package_json.dependencies.len(),
        dev_dependencies = package_json.dev_dependencies.len(),
        "wrote package.json"
    );

    Ok(package_json)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::types::{Linter, TemplateFamily, TemplateMode, TemplateSelection};

    fn request(family: TemplateFamily, mode: TemplateMode) -> InstallRequest {
        let mut request = InstallRequest::new(
            "my-app",
            "/tmp/my-app",
            TemplateSelection::new(family, mode),
        );
        request.next_version = "15.0.0".to_string();
        request
    }

    fn keys(map: &BTreeMap<String, String>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_minimal_typed_manifest() {
        let pkg = PackageJson::synthesize(&request(TemplateFamily::App, TemplateMode::TypeScript));

        assert_eq!(keys(&pkg.dependencies), vec!["next", "react", "react-dom"]);
        assert_eq!(pkg.dependencies["react"], NEXTJS_REACT_PEER_VERSION);
        assert_eq!(pkg.dependencies["next"], "15.0.0");
        assert_eq!(keys(&pkg.scripts), vec!["build", "dev", "start"]);
        assert_eq!(pkg.scripts["dev"], "next dev");
        assert_eq!(pkg.scripts["build"], "next build");
        assert_eq!(pkg.scripts["start"], "next start");
        assert_eq!(
            keys(&pkg.dev_dependencies),
            vec!["@types/node", "@types/react", "@types/react-dom", "typescript"]
        );
    }

    #[test]
    fn test_untyped_manifest_omits_dev_dependencies() {
        let pkg = PackageJson::synthesize(&request(TemplateFamily::App, TemplateMode::JavaScript));
        let json = pkg.to_json_string().unwrap();

        assert!(pkg.dev_dependencies.is_empty());
        assert!(!json.contains("devDependencies"));
        assert!(json.ends_with("}\n"));
        assert!(json.contains("\n  \"name\": \"my-app\",\n"));
    }

    #[test]
    fn test_webpack_adds_flag() {
        let mut req = request(TemplateFamily::App, TemplateMode::JavaScript);
        req.bundler = Bundler::Webpack;
        let pkg = PackageJson::synthesize(&req);
        assert_eq!(pkg.scripts["dev"], "next dev --webpack");
        assert_eq!(pkg.scripts["build"], "next build --webpack");
        assert_eq!(pkg.scripts["start"], "next start");
    }

    #[test]
    fn test_rspack_adds_companion_dependency() {
        let mut req = request(TemplateFamily::App, TemplateMode::JavaScript);
        req.bundler = Bundler::Rspack;
        let pkg = PackageJson::synthesize(&req);
        assert_eq!(pkg.scripts["dev"], "next dev");
        assert_eq!(pkg.dependencies["next-rspack"], "15.0.0");
    }

    #[test]
    fn test_eslint_and_tailwind() {
        let mut req = request(TemplateFamily::AppTw, TemplateMode::JavaScript);
        req.linter = Linter::Eslint;
        req.tailwind = true;
        req.react_compiler = true;
        let pkg = PackageJson::synthesize(&req);

        assert_eq!(pkg.scripts["lint"], "eslint");
        assert!(!pkg.scripts.contains_key("format"));
        assert_eq!(
            keys(&pkg.dev_dependencies),
            vec![
                "@tailwindcss/postcss",
                "babel-plugin-react-compiler",
                "eslint",
                "eslint-config-next",
                "tailwindcss",
            ]
        );
        assert_eq!(pkg.dev_dependencies["eslint-config-next"], "15.0.0");
    }

    #[test]
    fn test_biome_scripts() {
        let mut req = request(TemplateFamily::App, TemplateMode::JavaScript);
        req.linter = Linter::Biome;
        let pkg = PackageJson::synthesize(&req);

        assert_eq!(pkg.scripts["lint"], "biome check");
        assert_eq!(pkg.scripts["format"], "biome format --write");
        assert_eq!(pkg.dev_dependencies["@biomejs/biome"], BIOME_VERSION);
    }

    #[test]
    fn test_api_only_strips_ui() {
        let mut req = request(TemplateFamily::AppApi, TemplateMode::TypeScript);
        req.linter = Linter::Biome;
        let pkg = PackageJson::synthesize(&req);

        assert_eq!(keys(&pkg.dependencies), vec!["next"]);
        assert!(!pkg.scripts.contains_key("lint"));
        assert!(!pkg.scripts.contains_key("format"));
        assert!(!pkg.dev_dependencies.contains_key("@types/react-dom"));
        assert!(pkg.dev_dependencies.contains_key("@types/react"));
    }

    #[test]
    fn test_bun_adds_native_build_fields() {
        let mut req = request(TemplateFamily::App, TemplateMode::JavaScript);
        req.package_manager = PackageManager::Bun;
        let json = PackageJson::synthesize(&req).to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ignoreScripts"], serde_json::json!(["sharp", "unrs-resolver"]));
        assert_eq!(
            value["trustedDependencies"],
            serde_json::json!(["sharp", "unrs-resolver"])
        );
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let mut req = request(TemplateFamily::AppTw, TemplateMode::TypeScript);
        req.linter = Linter::Eslint;
        req.tailwind = true;
        let first = PackageJson::synthesize(&req).to_json_string().unwrap();
        let second = PackageJson::synthesize(&req).to_json_string().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_pnpm_workspace() {
        let temp = tempfile::tempdir().unwrap();
        let mut req = request(TemplateFamily::App, TemplateMode::JavaScript);
        req.root = temp.path().to_path_buf();
        req.package_manager = PackageManager::Pnpm;

        write_package_json(&req).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("pnpm-workspace.yaml")).unwrap(),
            PNPM_WORKSPACE
        );
        let json = fs::read_to_string(temp.path().join("package.json")).unwrap();
        assert!(!json.contains("ignoreScripts"));
    }

    #[test]
    fn test_output_is_sorted_at_every_level() {
        let mut req = request(TemplateFamily::App, TemplateMode::TypeScript);
        req.linter = Linter::Biome;
        req.package_manager = PackageManager::Bun;
        let json = PackageJson::synthesize(&req).to_json_string().unwrap();

        let top_level: Vec<&str> = json
            .lines()
            .filter(|line| line.starts_with("  \""))
            .map(|line| line.trim().split('"').nth(1).unwrap())
            .collect();
        let mut sorted = top_level.clone();
        sorted.sort();
        assert_eq!(top_level, sorted);

        let build = json.find("\"build\"").unwrap();
        let dev = json.find("\"dev\"").unwrap();
        let format = json.find("\"format\"").unwrap();
        let lint = json.find("\"lint\"").unwrap();
        let start = json.find("\"start\"").unwrap();
        assert!(build < dev && dev < format && format < lint && lint < start);
    }
}
