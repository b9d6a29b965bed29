//! Charm-style CLI prompts using cliclack

use crate::config::{OptionOverrides, Preferences, PreferencesStore, ProjectOptions};
use crate::product::ProductConfig;
use crate::runtime;
use crate::templates::package_json::next_version_from_env;
use crate::templates::{
    install_template, Bundler, InstallReport, InstallRequest, Linter, LocalStore, MemoryStore,
    PackageManager, TemplateStore,
};
use crate::validate::{self, DirectoryError};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Options given explicitly as flags
    pub overrides: OptionOverrides,

    /// Accept saved preferences or defaults without prompting
    pub yes: bool,

    /// Forget saved preferences before starting
    pub reset_preferences: bool,

    /// Local directory to use for templates instead of the embedded ones
    pub template_dir: Option<PathBuf>,

    /// Zip archive of templates, as produced by `build-zip`
    pub template_archive: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupChoice {
    Recommended,
    Reuse,
    Customize,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let interactive = !args.yes && !runtime::is_ci();
    if !interactive {
        cliclack::log::info("Running non-interactively, using saved preferences or defaults")?;
    }

    // Step 1: Preferences
    let prefs_store = open_preferences(config)?;
    if args.reset_preferences {
        if let Some(store) = &prefs_store {
            store.clear()?;
        }
        cliclack::log::success("Preferences reset")?;
    }
    let saved = load_preferences(prefs_store.as_ref())?;

    // Step 2: Project directory and name
    let project_dir = select_directory(config, &args, interactive)?;
    let root = absolute(&project_dir)?;
    let app_name = app_name_from_path(&root)?;
    check_app_name(&app_name)?;
    check_directory(&root)?;

    // Step 3: Options
    let mut overrides = args.overrides.clone();
    overrides
        .package_manager
        .get_or_insert_with(PackageManager::from_env);
    let options = select_options(saved.as_ref(), &overrides, interactive)?;

    if let Some(store) = &prefs_store {
        if let Err(e) = store.save(&Preferences::from_options(&options)) {
            warn!(
                path = %store.path().display(),
                error = %format!("{:#}", e),
                "could not save preferences"
            );
            cliclack::log::warning(format!("Could not save preferences: {:#}", e))?;
        }
    }

    // Step 4: Install template
    let package_manager = options.package_manager;
    let skip_install = options.skip_install;
    let next_version = next_version_from_env(config.next_version_env());
    let request = options.into_request(&app_name, &root, next_version);
    let store = open_store(&args)?;
    create_project(store.as_ref(), &request)?;

    // Step 5: Dependencies
    let installed = !skip_install && install_dependencies(&root, package_manager).await?;

    // Step 6: Show next steps
    print_next_steps(config, &project_dir, package_manager, installed)?;

    Ok(())
}

fn open_preferences<C: ProductConfig>(config: &C) -> Result<Option<PreferencesStore>> {
    match PreferencesStore::for_app(config.preferences_dir_name()) {
        Ok(store) => Ok(Some(store)),
        Err(e) => {
            warn!(error = %format!("{:#}", e), "preferences disabled");
            cliclack::log::warning(format!("Preferences disabled: {:#}", e))?;
            Ok(None)
        }
    }
}

fn load_preferences(store: Option<&PreferencesStore>) -> Result<Option<Preferences>> {
    let Some(store) = store else {
        return Ok(None);
    };
    match store.load() {
        Ok(prefs) => Ok(prefs),
        Err(e) => {
            warn!(
                path = %store.path().display(),
                error = %format!("{:#}", e),
                "ignoring saved preferences"
            );
            cliclack::log::warning(format!("Ignoring saved preferences: {:#}", e))?;
            Ok(None)
        }
    }
}

fn select_directory<C: ProductConfig>(
    config: &C,
    args: &CreateArgs,
    interactive: bool,
) -> Result<PathBuf> {
    if let Some(dir) = &args.directory {
        return Ok(dir.clone());
    }

    let default_name = config.default_project_name();
    if !interactive {
        cliclack::log::info(format!("Using project name: {}", default_name))?;
        return Ok(PathBuf::from(default_name));
    }

    let input: String = cliclack::input("What is your project named?")
        .placeholder(default_name)
        .default_input(default_name)
        .validate(|input: &String| validate::validate_project_name(input.trim()))
        .interact()?;

    let name = input.trim();
    Ok(PathBuf::from(if name.is_empty() { default_name } else { name }))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Package name derived from the last path component
fn app_name_from_path(root: &Path) -> Result<String> {
    // `file_name` already looks through a trailing `.`
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("Cannot derive a project name from {}", root.display()))
}

fn check_app_name(app_name: &str) -> Result<()> {
    let result = validate::validate_npm_package_name(app_name);
    if result.valid_for_new_packages {
        return Ok(());
    }

    cliclack::log::error(format!(
        "Could not create a project called \"{}\" because of npm naming restrictions:",
        app_name
    ))?;
    for problem in result.errors.iter().chain(result.warnings.iter()) {
        cliclack::log::remark(format!("* {}", problem))?;
    }
    anyhow::bail!("Invalid project name: {}", app_name);
}

fn check_directory(root: &Path) -> Result<()> {
    match validate::ensure_safe_directory(root) {
        Ok(()) => Ok(()),
        Err(DirectoryError::Conflicting { path, files }) => {
            cliclack::log::error(format!(
                "The directory {} contains files that could conflict:",
                path.display()
            ))?;
            for file in &files {
                cliclack::log::remark(format!("  {}", file))?;
            }
            anyhow::bail!(
                "Either try using a new directory name, or remove the files listed above."
            );
        }
        Err(e) => Err(e.into()),
    }
}

fn select_options(
    saved: Option<&Preferences>,
    overrides: &OptionOverrides,
    interactive: bool,
) -> Result<ProjectOptions> {
    if !interactive {
        return Ok(ProjectOptions::merged(saved, overrides));
    }

    let mut setup = cliclack::select("Would you like to use the recommended Next.js defaults?")
        .item(SetupChoice::Recommended, "Yes, use recommended defaults", "");
    if saved.is_some() {
        setup = setup.item(SetupChoice::Reuse, "No, reuse previous settings", "");
    }
    let choice = setup
        .item(SetupChoice::Customize, "No, customize settings", "")
        .interact()?;

    match choice {
        SetupChoice::Recommended => Ok(ProjectOptions::merged(None, overrides)),
        SetupChoice::Reuse => Ok(ProjectOptions::merged(saved, overrides)),
        SetupChoice::Customize => {
            customize_options(ProjectOptions::merged(saved, overrides), overrides)
        }
    }
}

/// Prompt for every option not fixed by a flag
fn customize_options(
    mut options: ProjectOptions,
    overrides: &OptionOverrides,
) -> Result<ProjectOptions> {
    if overrides.api.is_none() {
        options.api = cliclack::confirm("Would you like an API-only project (no React)?")
            .initial_value(options.api)
            .interact()?;
    }

    if overrides.typescript.is_none() {
        options.typescript = cliclack::confirm("Would you like to use TypeScript?")
            .initial_value(options.typescript)
            .interact()?;
    }

    if !options.api {
        if overrides.tailwind.is_none() {
            options.tailwind = cliclack::confirm("Would you like to use Tailwind CSS?")
                .initial_value(options.tailwind)
                .interact()?;
        }

        if overrides.linter.is_none() {
            options.linter = cliclack::select("Which linter would you like to use?")
                .item(Linter::Eslint, "ESLint", "")
                .item(Linter::Biome, "Biome", "")
                .item(Linter::None, "None", "")
                .initial_value(options.linter)
                .interact()?;
        }

        if overrides.empty.is_none() {
            options.empty = cliclack::confirm("Would you like to start from an empty page?")
                .initial_value(options.empty)
                .interact()?;
        }

        if overrides.react_compiler.is_none() {
            options.react_compiler = cliclack::confirm("Would you like to use React Compiler?")
                .initial_value(options.react_compiler)
                .interact()?;
        }
    }

    if overrides.src_dir.is_none() {
        options.src_dir = cliclack::confirm("Would you like your code inside a `src/` directory?")
            .initial_value(options.src_dir)
            .interact()?;
    }

    if overrides.bundler.is_none() {
        options.bundler = cliclack::select("Which bundler would you like to use?")
            .item(Bundler::Turbopack, "Turbopack", "recommended")
            .item(Bundler::Webpack, "Webpack", "")
            .item(Bundler::Rspack, "Rspack", "")
            .initial_value(options.bundler)
            .interact()?;
    }

    if overrides.import_alias.is_none() {
        let customize = cliclack::confirm("Would you like to customize the import alias?")
            .initial_value(crate::templates::rewrite::is_custom_alias(&options.import_alias))
            .interact()?;
        if customize {
            let alias: String = cliclack::input("What import alias would you like configured?")
                .placeholder(crate::templates::DEFAULT_IMPORT_ALIAS)
                .default_input(&options.import_alias)
                .validate(|input: &String| validate::validate_import_alias(input.trim()))
                .interact()?;
            options.import_alias = alias.trim().to_string();
        } else {
            options.import_alias = crate::templates::DEFAULT_IMPORT_ALIAS.to_string();
        }
    }

    Ok(options)
}

fn open_store(args: &CreateArgs) -> Result<Box<dyn TemplateStore>> {
    if let Some(path) = &args.template_archive {
        cliclack::log::info(format!("Using template archive {}", path.display()))?;
        return Ok(Box::new(MemoryStore::from_zip_file(path)?));
    }
    if let Some(path) = &args.template_dir {
        cliclack::log::info(format!("Using local templates from {}", path.display()))?;
        return Ok(Box::new(LocalStore::new(path.clone())));
    }
    Ok(Box::new(MemoryStore::embedded()))
}

fn create_project(store: &dyn TemplateStore, request: &InstallRequest) -> Result<InstallReport> {
    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Creating a new Next.js app in {}...",
        request.root().display()
    ));

    match install_template(store, request) {
        Ok(report) => {
            spinner.stop(format!(
                "Created {} files from the {} template",
                report.copied_files.len() + 1,
                request.template
            ));
            if !report.alias_rewrites.is_empty() {
                cliclack::log::info(format!(
                    "Rewrote imports in {} files to use {}",
                    report.alias_rewrites.len(),
                    request.import_alias
                ))?;
            }
            Ok(report)
        }
        Err(e) => {
            spinner.error("Failed to create project");
            Err(e)
        }
    }
}

/// Returns whether dependencies ended up installed
async fn install_dependencies(root: &Path, package_manager: PackageManager) -> Result<bool> {
    if !runtime::is_online().await {
        warn!("npm registry unreachable, skipping dependency installation");
        cliclack::log::warning("You appear to be offline. Skipping dependency installation.")?;
        return Ok(false);
    }

    cliclack::log::step(format!(
        "Installing dependencies with {}",
        package_manager.name()
    ))?;

    match runtime::install_dependencies(root, package_manager).await {
        Ok(()) => {
            cliclack::log::success("Dependencies installed")?;
            Ok(true)
        }
        Err(e) => {
            cliclack::log::warning(format!("{:#}", e))?;
            Ok(false)
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    package_manager: PackageManager,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(project_dir, package_manager, installed);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Docs: {}", config.docs_url());

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name_from_path() {
        assert_eq!(
            app_name_from_path(Path::new("/work/my-app")).unwrap(),
            "my-app"
        );
        assert_eq!(app_name_from_path(Path::new("/work/site/.")).unwrap(), "site");
        assert!(app_name_from_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(absolute(temp.path()).unwrap(), temp.path());
        assert!(absolute(Path::new("my-app")).unwrap().is_absolute());
    }

    #[test]
    fn test_local_template_dir_takes_effect() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("app/ts")).unwrap();
        std::fs::write(temp.path().join("app/ts/README-template.md"), "# app").unwrap();

        let args = CreateArgs {
            template_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let store = open_store(&args).unwrap();
        let entries = store.read_dir("app/ts").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "README-template.md");
    }
}
