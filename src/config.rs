// src/config.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "fstidy.toml";

/// What to do when a rename target already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Rename anyway, replacing whatever was there.
    #[default]
    Replace,
    /// Leave the entry under its old name.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory the traversal starts from.
    pub base_path: PathBuf,
    /// Exact file names to delete.
    pub delete: Vec<String>,
    /// Rename patterns, tried in order.
    pub rename: Vec<String>,
    /// Whether directories are offered to rename patterns.
    pub rename_directories: bool,
    pub overwrite: OverwritePolicy,
    /// Glob patterns for entries that are never visited.
    pub exclude: Vec<String>,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            delete: vec![String::from("example.txt")],
            rename: vec![String::from("*example")],
            rename_directories: false,
            overwrite: OverwritePolicy::Replace,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Parses a configuration document. Keys that are left out keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, has an unknown key,
    /// or a value of the wrong type.
    #[inline]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Compiles the `exclude` globs.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first pattern with invalid glob syntax.
    #[inline]
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.exclude
            .iter()
            .map(|raw| {
                Pattern::new(raw).with_context(|| format!("Invalid exclude pattern: {raw}"))
            })
            .collect()
    }
}

/// Loads the configuration for a run.
///
/// An explicit path is read as-is. Otherwise `start_dir` and its parents are
/// searched for `fstidy.toml`, stopping at the first one found. A relative
/// `base_path` is taken relative to the directory of the file it came from.
/// With no file anywhere, the built-in defaults are used.
///
/// # Arguments
///
/// * `explicit` - A configuration file given on the command line
/// * `start_dir` - The directory the search for `fstidy.toml` starts from
///
/// # Errors
///
/// This function may return an error if:
/// * The explicit file does not exist or cannot be read
/// * A configuration file cannot be parsed
#[inline]
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let mut current_dir = start_dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return read_config(&candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    tracing::debug!("no {CONFIG_FILE_NAME} found, using built-in defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config = Config::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    if config.base_path.is_relative() {
        if let Some(dir) = path.parent() {
            config.base_path = dir.join(&config.base_path);
        }
    }
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
