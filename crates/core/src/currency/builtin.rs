//! Embedded ISO 4217 currency table.

use super::definition::CurrencyDefinition;

/// (alphabetic code, name, minor unit, numeric code)
const ISO_4217: &[(&str, &str, u32, u16)] = &[
    ("AED", "UAE Dirham", 2, 784),
    ("ARS", "Argentine Peso", 2, 32),
    ("AUD", "Australian Dollar", 2, 36),
    ("BHD", "Bahraini Dinar", 3, 48),
    ("BRL", "Brazilian Real", 2, 986),
    ("CAD", "Canadian Dollar", 2, 124),
    ("CHF", "Swiss Franc", 2, 756),
    ("CLF", "Unidad de Fomento", 4, 990),
    ("CLP", "Chilean Peso", 0, 152),
    ("CNY", "Yuan Renminbi", 2, 156),
    ("COP", "Colombian Peso", 2, 170),
    ("CZK", "Czech Koruna", 2, 203),
    ("DKK", "Danish Krone", 2, 208),
    ("EGP", "Egyptian Pound", 2, 818),
    ("EUR", "Euro", 2, 978),
    ("GBP", "Pound Sterling", 2, 826),
    ("HKD", "Hong Kong Dollar", 2, 344),
    ("HUF", "Forint", 2, 348),
    ("IDR", "Rupiah", 2, 360),
    ("ILS", "New Israeli Sheqel", 2, 376),
    ("INR", "Indian Rupee", 2, 356),
    ("IQD", "Iraqi Dinar", 3, 368),
    ("ISK", "Iceland Krona", 0, 352),
    ("JOD", "Jordanian Dinar", 3, 400),
    ("JPY", "Yen", 0, 392),
    ("KRW", "Won", 0, 410),
    ("KWD", "Kuwaiti Dinar", 3, 414),
    ("LYD", "Libyan Dinar", 3, 434),
    ("MAD", "Moroccan Dirham", 2, 504),
    ("MXN", "Mexican Peso", 2, 484),
    ("MYR", "Malaysian Ringgit", 2, 458),
    ("NGN", "Naira", 2, 566),
    ("NOK", "Norwegian Krone", 2, 578),
    ("NZD", "New Zealand Dollar", 2, 554),
    ("OMR", "Rial Omani", 3, 512),
    ("PHP", "Philippine Peso", 2, 608),
    ("PLN", "Zloty", 2, 985),
    ("PYG", "Guarani", 0, 600),
    ("RON", "Romanian Leu", 2, 946),
    ("RUB", "Russian Ruble", 2, 643),
    ("SAR", "Saudi Riyal", 2, 682),
    ("SEK", "Swedish Krona", 2, 752),
    ("SGD", "Singapore Dollar", 2, 702),
    ("THB", "Baht", 2, 764),
    ("TND", "Tunisian Dinar", 3, 788),
    ("TRY", "Turkish Lira", 2, 949),
    ("TWD", "New Taiwan Dollar", 2, 901),
    ("UAH", "Hryvnia", 2, 980),
    ("UGX", "Uganda Shilling", 0, 800),
    ("USD", "US Dollar", 2, 840),
    ("UYU", "Peso Uruguayo", 2, 858),
    ("VND", "Dong", 0, 704),
    ("XAF", "CFA Franc BEAC", 0, 950),
    ("XOF", "CFA Franc BCEAO", 0, 952),
    ("XPF", "CFP Franc", 0, 953),
    ("XTS", "Codes specifically reserved for testing purposes", 2, 963),
    ("XXX", "The codes assigned for transactions where no currency is involved", 0, 999),
    ("ZAR", "Rand", 2, 710),
];

/// Returns the embedded currency definitions.
pub(crate) fn definitions() -> Vec<CurrencyDefinition> {
    ISO_4217
        .iter()
        .map(|&(code, name, minor_unit, numeric)| {
            CurrencyDefinition::new(code, name, minor_unit, Some(numeric))
        })
        .collect()
}
