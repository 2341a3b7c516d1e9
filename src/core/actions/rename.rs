// src/core/actions/rename.rs
use super::{Action, Outcome, Report, display_path};
use crate::config::{Config, OverwritePolicy};
use crate::core::pattern::CompiledMatcher;
use crate::models::{Entry, NameParts};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::PathBuf;

pub const RENAMED_FILES_HEADER: &str = "Переименованные файлы:";
pub const RENAMED_PATHS_HEADER: &str = "Переименованные пути:";

/// Renames entries whose stem matches one of the configured patterns to the
/// text the pattern's wildcards captured.
///
/// Patterns are tried in order and the first match wins. A file keeps its
/// extension; a directory, when directories are enabled, is matched and
/// renamed by its full name.
#[derive(Debug)]
pub struct RenameAction {
    matchers: Vec<CompiledMatcher>,
    include_dirs: bool,
    overwrite: OverwritePolicy,
    renamed: Vec<(PathBuf, PathBuf)>,
}

impl RenameAction {
    /// # Errors
    ///
    /// Returns an error if a pattern cannot be compiled.
    #[inline]
    pub fn new<I, S>(patterns: I, include_dirs: bool, overwrite: OverwritePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|pattern| CompiledMatcher::compile(pattern.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            matchers,
            include_dirs,
            overwrite,
            renamed: Vec::new(),
        })
    }

    /// # Errors
    ///
    /// Returns an error if one of the configured patterns cannot be compiled.
    #[inline]
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.rename, config.rename_directories, config.overwrite)
    }

    #[inline]
    #[must_use]
    pub fn renamed(&self) -> &[(PathBuf, PathBuf)] {
        &self.renamed
    }

    fn new_name(&self, entry: &Entry, name: &str) -> Option<String> {
        let parts = if entry.is_file() {
            NameParts::for_file(name)
        } else {
            NameParts::whole(name)
        };

        self.matchers.iter().find_map(|matcher| {
            let stem = matcher.rebuild(parts.stem)?;
            tracing::debug!(pattern = matcher.source(), name, "pattern matched");
            Some(parts.with_stem(&stem))
        })
    }
}

impl Action for RenameAction {
    fn process(&mut self, entry: &Entry) -> Result<Outcome> {
        if !(entry.is_file() || (self.include_dirs && entry.is_dir())) {
            return Ok(Outcome::Untouched);
        }
        let Some(name) = entry.name() else {
            return Ok(Outcome::Untouched);
        };
        let Some(new_name) = self.new_name(entry, name) else {
            return Ok(Outcome::Untouched);
        };

        if new_name.is_empty() {
            tracing::warn!(path = %entry.path.display(), "pattern leaves an empty name, skipping");
            return Ok(Outcome::Untouched);
        }
        if new_name == name {
            return Ok(Outcome::Untouched);
        }

        let target = entry.path.with_file_name(&new_name);
        if self.overwrite == OverwritePolicy::Skip && fs::symlink_metadata(&target).is_ok() {
            tracing::warn!(
                from = %entry.path.display(),
                to = %target.display(),
                "target already exists, skipping"
            );
            return Ok(Outcome::Untouched);
        }

        fs::rename(&entry.path, &target).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                entry.path.display(),
                target.display()
            )
        })?;
        tracing::info!(from = %entry.path.display(), to = %target.display(), "renamed");

        self.renamed.push((entry.path.clone(), target.clone()));
        Ok(Outcome::Renamed(target))
    }

    fn summarize(&self) -> Report {
        Report {
            header: if self.include_dirs {
                RENAMED_PATHS_HEADER
            } else {
                RENAMED_FILES_HEADER
            },
            lines: self
                .renamed
                .iter()
                .map(|(old, new)| format!("{} => {}", display_path(old), display_path(new)))
                .collect(),
        }
    }
}
