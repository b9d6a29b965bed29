//! better-next-app CLI - Project scaffolding for Next.js apps

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use next_scaffolder_core::tui::CreateArgs;
use next_scaffolder_core::{Bundler, Linter, OptionOverrides, PackageManager, ProductConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// better-next-app product configuration
#[derive(Clone)]
pub struct BetterNextAppConfig;

impl ProductConfig for BetterNextAppConfig {
    fn name(&self) -> &'static str {
        "better-next-app"
    }

    fn display_name(&self) -> &'static str {
        "Create Next App"
    }

    fn cli_description(&self) -> &'static str {
        "A fast CLI for scaffolding Next.js projects"
    }

    fn docs_url(&self) -> &'static str {
        "https://nextjs.org/docs"
    }
}

#[derive(Parser, Debug)]
#[command(name = "better-next-app")]
#[command(about = "A fast CLI for scaffolding Next.js projects")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Running without a subcommand is the same as `create`
    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Next.js project
    Create(CliCreateArgs),
    /// Pack a template directory into a zip archive (for development use)
    BuildZip(BuildZipArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct CliCreateArgs {
    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Initialize as a TypeScript project
    #[arg(long, visible_alias = "typescript", conflicts_with = "js")]
    pub ts: bool,

    /// Initialize as a JavaScript project
    #[arg(long, visible_alias = "javascript")]
    pub js: bool,

    /// Initialize with Tailwind CSS config
    #[arg(long, conflicts_with = "no_tailwind")]
    pub tailwind: bool,

    /// Initialize without Tailwind CSS
    #[arg(long)]
    pub no_tailwind: bool,

    /// Initialize with ESLint config
    #[arg(long, conflicts_with_all = ["biome", "no_linter"])]
    pub eslint: bool,

    /// Initialize with Biome config
    #[arg(long, conflicts_with = "no_linter")]
    pub biome: bool,

    /// Skip linter configuration
    #[arg(long)]
    pub no_linter: bool,

    /// Initialize inside a `src/` directory
    #[arg(long, conflicts_with = "no_src_dir")]
    pub src_dir: bool,

    /// Keep `app/` at the project root
    #[arg(long)]
    pub no_src_dir: bool,

    /// Specify import alias to use (default "@/*")
    #[arg(long, value_parser = parse_import_alias)]
    pub import_alias: Option<String>,

    /// Initialize an API-only project (route handlers, no React)
    #[arg(long)]
    pub api: bool,

    /// Initialize an empty project
    #[arg(long)]
    pub empty: bool,

    /// Use Webpack as the bundler
    #[arg(long, conflicts_with_all = ["rspack", "turbopack"])]
    pub webpack: bool,

    /// Use Rspack as the bundler
    #[arg(long, conflicts_with = "turbopack")]
    pub rspack: bool,

    /// Use Turbopack as the bundler (default)
    #[arg(long)]
    pub turbopack: bool,

    /// Enable React Compiler
    #[arg(long)]
    pub react_compiler: bool,

    /// Bootstrap the app using npm
    #[arg(long, conflicts_with_all = ["use_pnpm", "use_yarn", "use_bun"])]
    pub use_npm: bool,

    /// Bootstrap the app using pnpm
    #[arg(long, conflicts_with_all = ["use_yarn", "use_bun"])]
    pub use_pnpm: bool,

    /// Bootstrap the app using Yarn
    #[arg(long, conflicts_with = "use_bun")]
    pub use_yarn: bool,

    /// Bootstrap the app using Bun
    #[arg(long)]
    pub use_bun: bool,

    /// Skip installing dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Use saved preferences or defaults for all options (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Forget saved preferences before starting
    #[arg(long)]
    pub reset_preferences: bool,

    /// Local directory to use for templates instead of the embedded ones (for development use)
    #[arg(long = "template-dir", conflicts_with = "template_archive")]
    pub template_dir: Option<PathBuf>,

    /// Zip archive of templates built with `build-zip` (for development use)
    #[arg(long = "template-archive")]
    pub template_archive: Option<PathBuf>,
}

fn parse_import_alias(value: &str) -> Result<String, String> {
    next_scaffolder_core::validate::validate_import_alias(value)?;
    Ok(value.to_string())
}

/// First value whose flag was set
fn pick<T: Copy>(flags: &[(bool, T)]) -> Option<T> {
    flags.iter().find(|(set, _)| *set).map(|(_, value)| *value)
}

/// `Some(true)`/`Some(false)` for a `--x`/`--no-x` pair
fn toggle(on: bool, off: bool) -> Option<bool> {
    pick(&[(on, true), (off, false)])
}

impl CliCreateArgs {
    fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            typescript: toggle(self.ts, self.js),
            tailwind: toggle(self.tailwind, self.no_tailwind),
            linter: pick(&[
                (self.eslint, Linter::Eslint),
                (self.biome, Linter::Biome),
                (self.no_linter, Linter::None),
            ]),
            src_dir: toggle(self.src_dir, self.no_src_dir),
            import_alias: self.import_alias.clone(),
            empty: self.empty.then_some(true),
            api: self.api.then_some(true),
            bundler: pick(&[
                (self.webpack, Bundler::Webpack),
                (self.rspack, Bundler::Rspack),
                (self.turbopack, Bundler::Turbopack),
            ]),
            react_compiler: self.react_compiler.then_some(true),
            package_manager: pick(&[
                (self.use_npm, PackageManager::Npm),
                (self.use_pnpm, PackageManager::Pnpm),
                (self.use_yarn, PackageManager::Yarn),
                (self.use_bun, PackageManager::Bun),
            ]),
            skip_install: self.skip_install.then_some(true),
            disable_git: None,
        }
    }
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            overrides: args.overrides(),
            directory: args.directory,
            yes: args.yes,
            reset_preferences: args.reset_preferences,
            template_dir: args.template_dir,
            template_archive: args.template_archive,
        }
    }
}

#[derive(Parser, Debug)]
pub struct BuildZipArgs {
    /// Local directory containing the `<family>/<mode>/` template tree
    #[arg(long = "template-dir")]
    pub template_dir: PathBuf,

    /// Path of the zip archive to write
    #[arg(short, long, default_value = "templates.zip")]
    pub output: PathBuf,
}

fn init_logging() {
    // Prompts own stdout, so diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

async fn create(config: &BetterNextAppConfig, args: CliCreateArgs) -> Result<()> {
    let result = next_scaffolder_core::run(config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();
    let config = BetterNextAppConfig;

    match args.command {
        Some(Command::Create(create_args)) => create(&config, create_args).await,
        Some(Command::BuildZip(build_args)) => {
            next_scaffolder_core::templates::build_zip(&build_args.template_dir, &build_args.output)
        }
        None => create(&config, args.create).await,
    }
}
