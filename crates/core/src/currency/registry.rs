//! Currency registry with lazy, thread-safe initialization.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use pecunia_shared::config::CurrencyConfig;
use pecunia_shared::{MoneyError, MoneyResult};
use tracing::info;

use super::definition::CurrencyDefinition;
use super::loader::{BuiltinCurrencies, CurrencyConfigurationsLoader, FileCurrencyLoader};
use super::resolver::PrecisionResolver;

/// Largest scale a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// Registry of known currencies.
///
/// The loader runs once, on first lookup. A failed load leaves the registry
/// uninitialized so the next lookup retries.
pub struct CurrencyRegistry<L = BuiltinCurrencies> {
    loader: L,
    currencies: OnceCell<HashMap<String, CurrencyDefinition>>,
}

/// Registry whose source is chosen at runtime.
pub type DynCurrencyRegistry = CurrencyRegistry<Box<dyn CurrencyConfigurationsLoader>>;

impl CurrencyRegistry<BuiltinCurrencies> {
    /// Creates a registry backed by the embedded ISO 4217 table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BuiltinCurrencies)
    }
}

impl DynCurrencyRegistry {
    /// Creates a registry from configuration: the configured file if any,
    /// otherwise the embedded table.
    #[must_use]
    pub fn from_config(config: &CurrencyConfig) -> Self {
        let loader: Box<dyn CurrencyConfigurationsLoader> = match &config.registry_path {
            Some(path) => Box::new(FileCurrencyLoader::new(path)),
            None => Box::new(BuiltinCurrencies),
        };
        Self::new(loader)
    }
}

impl<L: CurrencyConfigurationsLoader> CurrencyRegistry<L> {
    /// Creates a registry over the given loader.
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            currencies: OnceCell::new(),
        }
    }

    fn currencies(&self) -> MoneyResult<&HashMap<String, CurrencyDefinition>> {
        self.currencies.get_or_try_init(|| {
            let definitions = self.loader.load()?;
            let map = index(definitions)?;
            info!(
                source = %self.loader.describe(),
                currencies = map.len(),
                "Currency registry loaded"
            );
            Ok(map)
        })
    }

    /// Forces loading, surfacing configuration errors early.
    pub fn initialize(&self) -> MoneyResult<usize> {
        self.currencies().map(HashMap::len)
    }

    /// Returns the full definition of `code`.
    pub fn definition(&self, code: &str) -> MoneyResult<CurrencyDefinition> {
        let currencies = self.currencies()?;
        currencies
            .get(code)
            .cloned()
            .ok_or_else(|| MoneyError::invalid_currency_code(code, sorted_codes(currencies)))
    }

    /// Returns every definition, sorted by code.
    pub fn definitions(&self) -> MoneyResult<Vec<CurrencyDefinition>> {
        let mut all: Vec<_> = self.currencies()?.values().cloned().collect();
        all.sort_by(|a, b| a.alphabetic_code.cmp(&b.alphabetic_code));
        Ok(all)
    }
}

impl<L: CurrencyConfigurationsLoader> PrecisionResolver for CurrencyRegistry<L> {
    fn precision_of(&self, code: &str) -> MoneyResult<u32> {
        self.definition(code).map(|d| d.minor_unit)
    }

    fn is_valid_code(&self, code: &str) -> bool {
        self.currencies()
            .is_ok_and(|currencies| currencies.contains_key(code))
    }

    fn allowed_codes(&self) -> Vec<String> {
        self.currencies().map(sorted_codes).unwrap_or_default()
    }
}

impl<L> std::fmt::Debug for CurrencyRegistry<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRegistry")
            .field("loaded", &self.currencies.get().map(HashMap::len))
            .finish_non_exhaustive()
    }
}

fn index(definitions: Vec<CurrencyDefinition>) -> MoneyResult<HashMap<String, CurrencyDefinition>> {
    let mut map = HashMap::with_capacity(definitions.len());

    for definition in definitions {
        let code = definition.alphabetic_code.clone();
        if code.trim().is_empty() {
            return Err(MoneyError::registry("currency with empty alphabetic code"));
        }
        if definition.minor_unit > MAX_PRECISION {
            return Err(MoneyError::registry(format!(
                "currency {code} has minor unit {} (max {MAX_PRECISION})",
                definition.minor_unit
            )));
        }
        if map.insert(code.clone(), definition).is_some() {
            return Err(MoneyError::registry(format!("duplicate currency code {code}")));
        }
    }

    Ok(map)
}

fn sorted_codes(currencies: &HashMap<String, CurrencyDefinition>) -> Vec<String> {
    let mut codes: Vec<String> = currencies.keys().cloned().collect();
    codes.sort();
    codes
}
