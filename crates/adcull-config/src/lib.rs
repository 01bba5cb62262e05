//! Configuration loading and CLI override definitions for adcull.

pub mod cli;
pub mod defaults;
pub mod loader;
pub mod types;
pub mod validate;

pub use cli::{CliOverrides, apply_overrides};
pub use loader::{ConfigError, load_config};
pub use types::{BudgetConfig, Config, LoggingConfig, OutputConfig};
pub use validate::validate_config;
