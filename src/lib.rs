// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;

pub use cli::{Args, execute, render_reports, run};
pub use config::{Config, OverwritePolicy, load_config};
pub use crate::core::actions::{Action, DeleteAction, Outcome, RenameAction, Report};
pub use crate::core::pattern::CompiledMatcher;
pub use crate::core::walker::{apply_actions, collect_entries};
pub use models::{Entry, EntryKind, NameParts};
