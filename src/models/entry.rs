// src/models/entry.rs
use std::fs::FileType;
use std::path::{Path, PathBuf};

/// What a visited path is, as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl From<FileType> for EntryKind {
    #[inline]
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_dir() {
            Self::Dir
        } else {
            Self::Other
        }
    }
}

/// A filesystem path visited once during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_walk(entry: &walkdir::DirEntry) -> Self {
        Self::new(entry.path(), EntryKind::from(entry.file_type()))
    }

    /// Final path component, or `None` when it is not valid UTF-8.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    #[inline]
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    #[inline]
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// The same entry moved to `path`.
    #[inline]
    #[must_use]
    pub fn moved_to(&self, path: &Path) -> Self {
        Self::new(path, self.kind)
    }
}
