//! Source providers for rule-list content.

pub mod file;

pub use file::{FileProvider, SourceContent, split_artifact};
