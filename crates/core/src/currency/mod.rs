//! Currency metadata: definitions, loaders, registry and precision lookup.

mod builtin;
pub mod definition;
pub mod loader;
pub mod registry;
pub mod resolver;

pub use definition::CurrencyDefinition;
pub use loader::{BuiltinCurrencies, CurrencyConfigurationsLoader, FileCurrencyLoader};
pub use registry::{CurrencyRegistry, DynCurrencyRegistry, MAX_PRECISION};
pub use resolver::{PrecisionResolver, StaticPrecisions};
