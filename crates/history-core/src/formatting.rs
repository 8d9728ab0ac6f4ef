use std::fmt;

use clap::ValueEnum;

/// Number and delimiter convention used when presenting payouts.
///
/// This is a formatting parameter only; it does not touch the process locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    /// Decimal comma, semicolon-separated export (`1,23`).
    #[default]
    De,
    /// Decimal point, comma-separated export (`1.23`).
    En,
}

impl Locale {
    /// Separator placed between the integer and fractional digits.
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::En => '.',
            Locale::De => ',',
        }
    }

    /// Field delimiter for delimited exports.
    ///
    /// Never the same character as the decimal separator.
    pub fn field_delimiter(self) -> u8 {
        match self {
            Locale::En => b',',
            Locale::De => b';',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::De => f.write_str("de"),
            Locale::En => f.write_str("en"),
        }
    }
}

/// Format `value` with exactly two decimal places using the locale's decimal
/// separator. Thousands separators are never inserted.
///
/// # Examples
///
/// ```
/// use history_core::formatting::{format_amount, Locale};
///
/// assert_eq!(format_amount(1234.5, Locale::En), "1234.50");
/// assert_eq!(format_amount(1234.5, Locale::De), "1234,50");
/// assert_eq!(format_amount(0.0, Locale::De), "0,00");
/// ```
pub fn format_amount(value: f64, locale: Locale) -> String {
    let fixed = format!("{:.2}", value);
    match locale.decimal_separator() {
        '.' => fixed,
        sep => fixed.replace('.', &sep.to_string()),
    }
}

/// Format a payout as a dollar string for the console table.
///
/// # Examples
///
/// ```
/// use history_core::formatting::{format_currency, Locale};
///
/// assert_eq!(format_currency(1234.5, Locale::En), "$1234.50");
/// assert_eq!(format_currency(1234.5, Locale::De), "$1234,50");
/// ```
pub fn format_currency(value: f64, locale: Locale) -> String {
    format!("${}", format_amount(value, locale))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
