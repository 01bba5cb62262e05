//! CLI override definitions and application logic.

use clap::Parser;

use crate::Config;

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override target rule count for the reduced artifact
    #[arg(long)]
    pub target: Option<usize>,
    /// Override the hard minimum rule count
    #[arg(long)]
    pub minimum: Option<usize>,
    /// Override the hard maximum rule count
    #[arg(long)]
    pub maximum: Option<usize>,
    /// Override artifact header title
    #[arg(long)]
    pub title: Option<String>,
    /// Override artifact header description
    #[arg(long)]
    pub description: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = overrides.target {
        config.budget.target = v;
    }
    if let Some(v) = overrides.minimum {
        config.budget.minimum = v;
    }
    if let Some(v) = overrides.maximum {
        config.budget.maximum = v;
    }
    if let Some(v) = &overrides.title {
        config.output.title = v.clone();
    }
    if let Some(v) = &overrides.description {
        config.output.description = v.clone();
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}
