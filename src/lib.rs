//! # adcull
//!
//! Curates a corpus of ad/tracker filter rules gathered from many
//! third-party lists into a deduplicated, categorized, size-bounded
//! artifact suitable for resource-constrained consumers such as low-memory
//! DNS filters.
//!
//! ## Crates
//!
//! - [`adcull_core`] - Default values and error classification constants
//! - [`adcull_config`] - Configuration loading and validation
//! - [`adcull_rules`] - The rule corpus reduction engine

pub use adcull_config as config;
pub use adcull_core as core;
pub use adcull_rules as rules;

pub mod cli;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use adcull_config::{Config, load_config, validate_config};
    pub use adcull_rules::{
        Budget, Category, Header, RuleSet, SelectedRules, merge_contents, merge_files, reduce,
    };
}
