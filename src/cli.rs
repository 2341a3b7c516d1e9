// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, load_config};
use crate::core::actions::{Action, DeleteAction, RenameAction, Report};
use crate::core::walker::{apply_actions, collect_entries};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Don't delete files
    #[arg(short = 'd', long)]
    pub no_delete: bool,

    /// Don't rename files
    #[arg(short = 'r', long)]
    pub no_rename: bool,

    /// Configuration file (defaults to the nearest fstidy.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to process, overriding the configured base path
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Also rename directories whose name matches a pattern
    #[arg(long)]
    pub dirs: bool,

    /// Diagnostic log level on stderr (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Resolves the configuration for this run, with command-line overrides
    /// applied on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable or the
    /// configuration file cannot be read or parsed.
    #[inline]
    pub fn resolve_config(&self) -> Result<Config> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        let mut config = load_config(self.config.as_deref(), &cwd)?;
        if let Some(path) = &self.path {
            config.base_path.clone_from(path);
        }
        if self.dirs {
            config.rename_directories = true;
        }
        Ok(config)
    }
}

/// Builds the enabled actions in their fixed order: delete, then rename.
///
/// # Errors
///
/// Returns an error if a rename pattern cannot be compiled.
#[inline]
pub fn build_actions(args: &Args, config: &Config) -> Result<Vec<Box<dyn Action>>> {
    let mut actions: Vec<Box<dyn Action>> = Vec::new();
    if !args.no_delete {
        actions.push(Box::new(DeleteAction::new(&config.delete)));
    }
    if !args.no_rename {
        actions.push(Box::new(RenameAction::from_config(config)?));
    }
    Ok(actions)
}

/// Runs every enabled action over the configured tree and returns their
/// reports in action order.
///
/// # Errors
///
/// This function may return an error if:
/// * A rename or exclude pattern in the configuration is invalid
/// * The base path cannot be walked
/// * A delete or rename fails with an unexpected filesystem error
#[inline]
pub fn execute(args: &Args, config: &Config) -> Result<Vec<Report>> {
    let mut actions = build_actions(args, config)?;
    let excludes = config.exclude_patterns()?;

    tracing::info!(root = %config.base_path.display(), actions = actions.len(), "starting run");
    let entries = collect_entries(&config.base_path, &excludes)?;
    apply_actions(&entries, &mut actions)?;

    Ok(actions.iter().map(|action| action.summarize()).collect())
}

/// The console output of a run: each report followed by a blank line.
#[inline]
#[must_use]
pub fn render_reports(reports: &[Report]) -> String {
    reports.iter().map(|report| format!("{report}\n")).collect()
}

/// # Errors
///
/// Returns any error from loading the configuration or from [`execute`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    let config = args.resolve_config()?;
    let reports = execute(&args, &config)?;
    print!("{}", render_reports(&reports));
    Ok(())
}

/// Sends diagnostics to stderr. `RUST_LOG` wins over `-v`; without either,
/// nothing is logged.
#[inline]
pub fn init_logging(verbose: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(match verbose {
            0 => "off",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }),
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Failed to initialise logging: {e}");
    }
}
