// src/models/name_parts.rs

/// A name split into the part matched by rename patterns and the part that
/// is carried over unchanged.
///
/// Files split on the last dot, so `archive.tar.gz` has the stem
/// `archive.tar` and the extension `gz`. A name without a dot is all stem.
/// Directories are never split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameParts<'a> {
    pub stem: &'a str,
    pub separator: &'a str,
    pub extension: &'a str,
}

impl<'a> NameParts<'a> {
    #[inline]
    #[must_use]
    pub fn for_file(name: &'a str) -> Self {
        match name.rfind('.') {
            Some(index) => Self {
                stem: &name[..index],
                separator: &name[index..=index],
                extension: &name[index.saturating_add(1)..],
            },
            None => Self::whole(name),
        }
    }

    #[inline]
    #[must_use]
    pub const fn whole(name: &'a str) -> Self {
        Self {
            stem: name,
            separator: "",
            extension: "",
        }
    }

    /// Reassembles a name with `stem` in place of the original stem.
    #[inline]
    #[must_use]
    pub fn with_stem(&self, stem: &str) -> String {
        format!("{stem}{}{}", self.separator, self.extension)
    }
}
