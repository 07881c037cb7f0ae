use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Client configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with AHORROS_ prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the savings backend (required, no compiled-in default).
    #[serde(default)]
    pub base_url: String,

    /// Request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                timeout_secs: None,
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with AHORROS_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("AHORROS_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url is required. Set AHORROS_API__BASE_URL environment variable or configure in config.yaml.".into(),
            ));
        }

        let base_url = &self.api.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "api.base_url '{base_url}' must start with http:// or https://"
            )));
        }

        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "api.timeout_secs cannot be 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:3000".into();
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validation_accepts_valid_config() {
        let config = valid_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_base_url() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api.base_url"));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let mut config = valid_config();
        config.api.timeout_secs = Some(0);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout_secs"));
    }

    #[test]
    fn base_url_boundaries() {
        let cases = [
            ("http://localhost:3000", true, "http with port"),
            ("https://api.example.com/v1", true, "https with path"),
            ("", false, "empty"),
            ("localhost:3000", false, "no scheme"),
            ("ftp://files.example.com", false, "ftp scheme"),
            ("//example.com", false, "protocol-relative"),
        ];

        for (base_url, should_pass, desc) in cases {
            let mut config = valid_config();
            config.api.base_url = base_url.into();
            let result = config.validate();
            assert_eq!(result.is_ok(), should_pass, "case '{}': {:?}", desc, result);
        }
    }

    #[test]
    fn test_env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
api:
  base_url: http://from-yaml:3000
  timeout_secs: 10
logging:
  level: debug
",
            )?;
            jail.set_env("AHORROS_API__BASE_URL", "https://from-env.example.com");

            let config = Config::load().expect("config should load");
            assert_eq!(config.api.base_url, "https://from-env.example.com");
            assert_eq!(config.api.timeout_secs, Some(10));
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_load_without_base_url_fails() {
        Jail::expect_with(|_jail| {
            let result = Config::load_from("missing.yaml");
            assert!(matches!(result, Err(ConfigError::Validation(_))));
            Ok(())
        });
    }
}
