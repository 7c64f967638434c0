//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency metadata configuration.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Display formatting configuration.
    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Currency metadata configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyConfig {
    /// TOML or JSON file with currency definitions.
    ///
    /// When unset the built-in ISO 4217 table is used.
    #[serde(default)]
    pub registry_path: Option<PathBuf>,
    /// Currency used by the money factory when none is given.
    #[serde(default)]
    pub default_code: Option<String>,
}

/// Display formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    /// Locale used when the caller does not pass one.
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PECUNIA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
