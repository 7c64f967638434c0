//! Sources of currency metadata.

use std::path::{Path, PathBuf};

use pecunia_shared::{MoneyError, MoneyResult};
use serde::Deserialize;

use super::builtin;
use super::definition::CurrencyDefinition;

/// Loads the list of known currencies.
pub trait CurrencyConfigurationsLoader: Send + Sync {
    /// Returns every currency definition from this source.
    fn load(&self) -> MoneyResult<Vec<CurrencyDefinition>>;

    /// Short description of the source, used in logs.
    fn describe(&self) -> String;
}

impl<L: CurrencyConfigurationsLoader + ?Sized> CurrencyConfigurationsLoader for Box<L> {
    fn load(&self) -> MoneyResult<Vec<CurrencyDefinition>> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The embedded ISO 4217 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCurrencies;

impl CurrencyConfigurationsLoader for BuiltinCurrencies {
    fn load(&self) -> MoneyResult<Vec<CurrencyDefinition>> {
        Ok(builtin::definitions())
    }

    fn describe(&self) -> String {
        "builtin ISO 4217 table".to_string()
    }
}

/// Reads currencies from a TOML or JSON file.
///
/// The format is picked from the file extension:
///
/// ```toml
/// [[currencies]]
/// alphabetic_code = "EUR"
/// name = "Euro"
/// minor_unit = 2
/// numeric_code = 978
/// ```
#[derive(Debug, Clone)]
pub struct FileCurrencyLoader {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CurrencyFile {
    currencies: Vec<CurrencyDefinition>,
}

impl FileCurrencyLoader {
    /// Creates a loader for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CurrencyConfigurationsLoader for FileCurrencyLoader {
    fn load(&self) -> MoneyResult<Vec<CurrencyDefinition>> {
        let file: CurrencyFile = config::Config::builder()
            .add_source(config::File::from(self.path.as_path()))
            .build()
            .and_then(|c| c.try_deserialize::<CurrencyFile>())
            .map_err(|e| {
                MoneyError::registry(format!(
                    "currencies configuration file \"{}\" is not readable: {e}",
                    self.path.display()
                ))
            })?;

        Ok(file.currencies)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
