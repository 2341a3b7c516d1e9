// src/models.rs
mod entry;
mod name_parts;

pub use entry::{Entry, EntryKind};
pub use name_parts::NameParts;
