//! Error types for the reduction engine.

use thiserror::Error;

/// Errors that can occur in the reduction engine.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("no input sources given")]
    NoInput,

    #[error("corpus is empty after merging all sources")]
    EmptyCorpus,

    #[error("invalid budget: {0}")]
    InvalidBudget(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("header format error: {0}")]
    Format(#[from] time::error::Format),
}
