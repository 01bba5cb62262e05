//! Configuration file loading and error types.

use std::{fs, path::Path};

use crate::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format")]
    UnsupportedFormat,
    #[error("validation: {0}")]
    Validation(String),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
        "json" | "jsonc" => {
            let stripped = json_comments::StripComments::new(data.as_bytes());
            Ok(serde_json::from_reader(stripped)?)
        }
        "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
        "toml" => Ok(toml::from_str(&data)?),
        _ => Err(ConfigError::UnsupportedFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("adcull-config-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_toml() {
        let path = write_temp("c.toml", "[budget]\ntarget = 1000\nminimum = 10\nmaximum = 2000\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.budget.target, 1000);
    }

    #[test]
    fn load_yaml() {
        let path = write_temp("c.yaml", "budget:\n  target: 500\n  minimum: 5\n  maximum: 600\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.budget.target, 500);
    }

    #[test]
    fn load_jsonc_with_comments() {
        let path = write_temp(
            "c.jsonc",
            "{\n  // target size\n  \"budget\": { \"target\": 50, \"minimum\": 1, \"maximum\": 60 }\n}\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.budget.target, 50);
    }

    #[test]
    fn unsupported_extension() {
        let path = write_temp("c.ini", "target = 1\n");
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::UnsupportedFormat)
        ));
    }
}
