//! Configuration validation logic.

use crate::Config;
use crate::loader::ConfigError;

/// Validate a configuration before any work starts.
///
/// Budget misconfiguration is fatal here, at configuration time, never
/// discovered mid-run.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let budget = &config.budget;
    if budget.maximum == 0 {
        return Err(ConfigError::Validation("budget.maximum must be > 0".into()));
    }
    if budget.minimum > budget.maximum {
        return Err(ConfigError::Validation(format!(
            "budget.minimum ({}) exceeds budget.maximum ({})",
            budget.minimum, budget.maximum
        )));
    }
    if budget.target < budget.minimum || budget.target > budget.maximum {
        return Err(ConfigError::Validation(format!(
            "budget.target ({}) outside [{}, {}]",
            budget.target, budget.minimum, budget.maximum
        )));
    }
    if config.output.title.trim().is_empty() {
        return Err(ConfigError::Validation("output.title is empty".into()));
    }
    if let Some(level) = &config.logging.level {
        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of: {valid:?}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&Config::default()).unwrap();
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut config = Config::default();
        config.budget.minimum = 100;
        config.budget.maximum = 10;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn target_outside_bounds_rejected() {
        let mut config = Config::default();
        config.budget.target = config.budget.maximum + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_title_rejected() {
        let mut config = Config::default();
        config.output.title = "  ".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn bad_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = Some("verbose".into());
        assert!(validate_config(&config).is_err());
    }
}
