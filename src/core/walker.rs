// src/core/walker.rs
use crate::core::actions::{Action, Outcome};
use crate::models::Entry;
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::Path;
use walkdir::WalkDir;

/// Lists every entry below `root`, excluding `root` itself.
///
/// The listing is taken in full before anything is changed and is returned
/// with every directory after its contents, so renaming an entry never
/// affects what is visited later. Symlinks are listed but not followed.
///
/// # Arguments
///
/// * `root` - The directory to walk
/// * `excludes` - Patterns for entries to skip; a skipped directory is not descended into
///
/// # Errors
///
/// This function may return an error if:
/// * `root` does not exist or cannot be read
/// * A directory below `root` cannot be read during traversal
#[inline]
pub fn collect_entries(root: &Path, excludes: &[Pattern]) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, root, excludes))
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        entries.push(Entry::from_walk(&entry));
    }
    // Pre-order reversed puts each directory after everything below it.
    entries.reverse();

    tracing::debug!(count = entries.len(), root = %root.display(), "collected entries");
    Ok(entries)
}

/// Offers each entry to each action in order.
///
/// Once an action removes an entry the remaining actions do not see it; once
/// an action renames one, the remaining actions see it under its new path.
///
/// # Errors
///
/// Stops at and returns the first error an action reports.
#[inline]
pub fn apply_actions(entries: &[Entry], actions: &mut [Box<dyn Action>]) -> Result<()> {
    for original in entries {
        let mut entry = original.clone();
        for action in actions.iter_mut() {
            match action.process(&entry)? {
                Outcome::Untouched => {}
                Outcome::Removed => break,
                Outcome::Renamed(path) => entry = entry.moved_to(&path),
            }
        }
    }
    Ok(())
}

/// Whether an entry matches one of the exclude patterns, either by name or
/// by its path relative to the traversal root.
fn should_exclude(entry: &walkdir::DirEntry, root: &Path, excludes: &[Pattern]) -> bool {
    if excludes.is_empty() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());

    excludes
        .iter()
        .any(|pattern| pattern.matches(&name) || pattern.matches_path(relative))
}
