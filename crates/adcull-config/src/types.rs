//! Configuration type definitions for budget, output, and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub budget: BudgetConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rule-count bounds for the reduction pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Target rule count for the reduced artifact.
    #[serde(default = "default_target_rules")]
    pub target: usize,
    /// Hard lower bound on the reduced artifact size.
    #[serde(default = "default_min_rules")]
    pub minimum: usize,
    /// Hard upper bound on the reduced artifact size.
    #[serde(default = "default_max_rules")]
    pub maximum: usize,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            target: default_target_rules(),
            minimum: default_min_rules(),
            maximum: default_max_rules(),
        }
    }
}

/// Artifact header metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_homepage")]
    pub homepage: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            homepage: default_homepage(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level (trace/debug/info/warn/error).
    #[serde(default)]
    pub level: Option<String>,
    /// Output format (json, pretty, compact).
    #[serde(default)]
    pub format: Option<String>,
    /// Output target (stdout, stderr).
    #[serde(default)]
    pub output: Option<String>,
    /// Per-module log level overrides.
    #[serde(default)]
    pub filters: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.budget.target, adcull_core::DEFAULT_TARGET_RULES);
        assert_eq!(config.budget.minimum, adcull_core::DEFAULT_MIN_RULES);
        assert_eq!(config.budget.maximum, adcull_core::DEFAULT_MAX_RULES);
        assert_eq!(config.output.title, adcull_core::DEFAULT_TITLE);
    }

    #[test]
    fn partial_budget_section_fills_in() {
        let config: Config = toml::from_str("[budget]\ntarget = 5000\n").unwrap();
        assert_eq!(config.budget.target, 5000);
        assert_eq!(config.budget.maximum, adcull_core::DEFAULT_MAX_RULES);
    }
}
