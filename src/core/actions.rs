// src/core/actions.rs
mod delete;
mod rename;

pub use delete::DeleteAction;
pub use rename::RenameAction;

use crate::models::Entry;
use anyhow::Result;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// What an action did with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Untouched,
    Removed,
    Renamed(PathBuf),
}

/// A maintenance step offered every visited entry in turn.
pub trait Action {
    /// Handles one entry, mutating the filesystem if it applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying filesystem call fails for any
    /// reason other than the ones the action tolerates.
    fn process(&mut self, entry: &Entry) -> Result<Outcome>;

    /// Everything the action did so far, in visit order.
    fn summarize(&self) -> Report;
}

/// A header line followed by one line per recorded change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: &'static str,
    pub lines: Vec<String>,
}

impl fmt::Display for Report {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Renders a path for a report line, without the leading `./` a walk from
/// the current directory puts on every path.
#[inline]
#[must_use]
pub fn display_path(path: &Path) -> String {
    let mut components = path.components();
    if path.components().count() > 1 && components.next() == Some(Component::CurDir) {
        components.as_path().display().to_string()
    } else {
        path.display().to_string()
    }
}
