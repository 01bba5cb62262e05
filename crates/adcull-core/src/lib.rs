//! Core constants shared across adcull crates.
//!
//! This crate provides:
//! - Default configuration values
//! - Error classification constants for logging
//! - Common project metadata

pub mod defaults;
pub mod errors;

// Re-export commonly used items at crate root
pub use defaults::*;
pub use errors::*;

/// Project name.
pub const PROJECT_NAME: &str = "adcull";
/// Project version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
