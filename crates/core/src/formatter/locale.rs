//! Locale number conventions.
//!
//! Conventions are looked up once per locale and kept in a process-wide
//! cache. Unknown locales fall back to their language (`fr_CA` -> `fr`) and
//! finally to `en`.

use moka::sync::Cache;
use once_cell::sync::Lazy;
use tracing::debug;

/// Maximum number of distinct locales kept in the cache.
const LOCALE_CACHE_CAPACITY: u64 = 64;

/// Locale used when neither the locale nor its language is known.
pub const FALLBACK_LOCALE: &str = "en";

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1,234.50`
    Prefix,
    /// `1 234,50 €` (separated by a no-break space)
    Suffix,
}

/// Number formatting conventions of one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConventions {
    /// Normalized locale name these conventions were resolved for.
    pub locale: String,
    /// Separator between integer and fractional digits.
    pub decimal_separator: &'static str,
    /// Separator between groups of three integer digits.
    pub group_separator: &'static str,
    /// Placement of the currency symbol.
    pub symbol_position: SymbolPosition,
}

struct KnownLocale {
    name: &'static str,
    decimal: &'static str,
    group: &'static str,
    position: SymbolPosition,
}

const fn known(
    name: &'static str,
    decimal: &'static str,
    group: &'static str,
    position: SymbolPosition,
) -> KnownLocale {
    KnownLocale {
        name,
        decimal,
        group,
        position,
    }
}

const NARROW_NBSP: &str = "\u{202f}";
const NBSP: &str = "\u{a0}";

const KNOWN_LOCALES: &[KnownLocale] = &[
    known("en", ".", ",", SymbolPosition::Prefix),
    known("en_US", ".", ",", SymbolPosition::Prefix),
    known("en_GB", ".", ",", SymbolPosition::Prefix),
    known("en_CA", ".", ",", SymbolPosition::Prefix),
    known("ja", ".", ",", SymbolPosition::Prefix),
    known("zh", ".", ",", SymbolPosition::Prefix),
    known("fr", ",", NARROW_NBSP, SymbolPosition::Suffix),
    known("fr_FR", ",", NARROW_NBSP, SymbolPosition::Suffix),
    known("fr_CH", ",", NARROW_NBSP, SymbolPosition::Suffix),
    known("de", ",", ".", SymbolPosition::Suffix),
    known("de_DE", ",", ".", SymbolPosition::Suffix),
    known("de_AT", ",", NBSP, SymbolPosition::Suffix),
    known("de_CH", ".", "\u{2019}", SymbolPosition::Prefix),
    known("it", ",", ".", SymbolPosition::Suffix),
    known("es", ",", ".", SymbolPosition::Suffix),
    known("nl", ",", ".", SymbolPosition::Prefix),
    known("pt", ",", NBSP, SymbolPosition::Suffix),
    known("pt_BR", ",", ".", SymbolPosition::Prefix),
    known("pl", ",", NBSP, SymbolPosition::Suffix),
    known("sv", ",", NBSP, SymbolPosition::Suffix),
];

static LOCALE_CACHE: Lazy<Cache<String, LocaleConventions>> =
    Lazy::new(|| Cache::builder().max_capacity(LOCALE_CACHE_CAPACITY).build());

/// Normalizes `fr-ca`, `fr_CA` and `FR_ca` to `fr_CA`.
pub fn normalize(locale: &str) -> String {
    let mut parts = locale.trim().split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => {
            format!("{language}_{}", region.to_ascii_uppercase())
        }
        _ => language,
    }
}

/// Splits a normalized locale into its language and region.
pub fn split(locale: &str) -> (&str, Option<&str>) {
    match locale.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (locale, None),
    }
}

/// Resolves the conventions for `locale`, through the shared cache.
pub fn conventions(locale: &str) -> LocaleConventions {
    let key = normalize(locale);
    LOCALE_CACHE.get_with(key.clone(), || lookup(&key))
}

/// Number of locales currently cached.
pub fn cached_locales() -> u64 {
    LOCALE_CACHE.run_pending_tasks();
    LOCALE_CACHE.entry_count()
}

fn lookup(locale: &str) -> LocaleConventions {
    let (language, _) = split(locale);
    let found = find(locale)
        .or_else(|| find(language))
        .or_else(|| find(FALLBACK_LOCALE));

    let entry = found.unwrap_or(&KNOWN_LOCALES[0]);
    if entry.name != locale {
        debug!(requested = locale, resolved = entry.name, "Locale fallback");
    }

    LocaleConventions {
        locale: entry.name.to_string(),
        decimal_separator: entry.decimal,
        group_separator: entry.group,
        symbol_position: entry.position,
    }
}

fn find(name: &str) -> Option<&'static KnownLocale> {
    KNOWN_LOCALES.iter().find(|l| l.name == name)
}
