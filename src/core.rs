// src/core.rs
pub mod actions;
pub mod pattern;
pub mod walker;
