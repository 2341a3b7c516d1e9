// src/core/actions/delete.rs
use super::{Action, Outcome, Report, display_path};
use crate::models::Entry;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DELETED_HEADER: &str = "Удалённые файлы:";

/// Removes files whose name is exactly one of the configured names.
#[derive(Debug, Default)]
pub struct DeleteAction {
    names: HashSet<String>,
    removed: Vec<PathBuf>,
}

impl DeleteAction {
    #[inline]
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            removed: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn removed(&self) -> &[PathBuf] {
        &self.removed
    }
}

impl Action for DeleteAction {
    fn process(&mut self, entry: &Entry) -> Result<Outcome> {
        if !entry.is_file() {
            return Ok(Outcome::Untouched);
        }
        let Some(name) = entry.name() else {
            return Ok(Outcome::Untouched);
        };
        if !self.names.contains(name) {
            return Ok(Outcome::Untouched);
        }

        match fs::remove_file(&entry.path) {
            Ok(()) => tracing::info!(path = %entry.path.display(), "deleted"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %entry.path.display(), "already gone");
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to delete {}", entry.path.display()));
            }
        }

        self.removed.push(entry.path.clone());
        Ok(Outcome::Removed)
    }

    fn summarize(&self) -> Report {
        Report {
            header: DELETED_HEADER,
            lines: self
                .removed
                .iter()
                .map(|path| display_path(path))
                .collect(),
        }
    }
}
