// SPDX-License-Identifier: GPL-3.0-only

//! Locale aware price formatting.
//!
//! Only a handful of locales and currencies are known. Anything else is treated as a
//! configuration error: a warning is logged and the price is rendered as `"<CODE> <amount>"`.

use std::fmt;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_CURRENCY: &str = "EUR";

/// How a locale lays out a monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocaleRules {
    symbol_first: bool,
    group_separator: char,
    decimal_separator: char,
    symbol_spacing: bool,
}

const ENGLISH: LocaleRules = LocaleRules {
    symbol_first: true,
    group_separator: ',',
    decimal_separator: '.',
    symbol_spacing: false,
};

const CONTINENTAL: LocaleRules = LocaleRules {
    symbol_first: false,
    group_separator: '.',
    decimal_separator: ',',
    symbol_spacing: true,
};

const FRENCH: LocaleRules = LocaleRules {
    symbol_first: false,
    group_separator: ' ',
    decimal_separator: ',',
    symbol_spacing: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Style {
    Localized {
        symbol: &'static str,
        rules: LocaleRules,
    },
    /// Used when the configuration could not be understood
    Manual { code: String },
}

/// Why a locale/currency pair was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatConfigError {
    MalformedLocale(String),
    UnsupportedLocale(String),
    MalformedCurrency(String),
    UnsupportedCurrency(String),
}

impl fmt::Display for FormatConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatConfigError::MalformedLocale(l) => write!(f, "malformed locale '{l}'"),
            FormatConfigError::UnsupportedLocale(l) => write!(f, "unsupported locale '{l}'"),
            FormatConfigError::MalformedCurrency(c) => write!(f, "malformed currency code '{c}'"),
            FormatConfigError::UnsupportedCurrency(c) => {
                write!(f, "unsupported currency code '{c}'")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    style: Style,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self {
            style: Style::Localized {
                symbol: "€",
                rules: ENGLISH,
            },
        }
    }
}

impl PriceFormatter {
    /// Builds a formatter for the given locale tag (`en`, `es-ES`, `de_DE`...)
    /// and ISO currency code.
    /// Invalid configuration never fails, it degrades to manual formatting.
    pub fn new(locale: &str, currency: &str) -> Self {
        match Self::try_new(locale, currency) {
            Ok(formatter) => formatter,
            Err(err) => {
                tracing::warn!("price formatter falling back to manual formatting: {err}");
                let code = currency.trim().to_ascii_uppercase();
                Self {
                    style: Style::Manual { code },
                }
            }
        }
    }

    pub fn try_new(locale: &str, currency: &str) -> Result<Self, FormatConfigError> {
        let rules = locale_rules(locale)?;
        let symbol = currency_symbol(currency)?;
        Ok(Self {
            style: Style::Localized { symbol, rules },
        })
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.style, Style::Manual { .. })
    }

    pub fn format(&self, amount: f64) -> String {
        match &self.style {
            Style::Manual { code } => {
                if code.is_empty() {
                    format!("{amount:.2}")
                } else {
                    format!("{code} {amount:.2}")
                }
            }
            Style::Localized { symbol, rules } => {
                let cents = (amount * 100.0).round() as i64;
                let negative = cents < 0;
                let cents = cents.unsigned_abs();
                let number = format!(
                    "{}{}{:02}",
                    group_digits(cents / 100, rules.group_separator),
                    rules.decimal_separator,
                    cents % 100
                );
                let space = if rules.symbol_spacing { " " } else { "" };
                let sign = if negative { "-" } else { "" };

                if rules.symbol_first {
                    format!("{sign}{symbol}{space}{number}")
                } else {
                    format!("{sign}{number}{space}{symbol}")
                }
            }
        }
    }
}

/// Formats the amount with the default (`en`, `EUR`) formatter
pub fn format_price(amount: f64) -> String {
    PriceFormatter::default().format(amount)
}

fn locale_rules(locale: &str) -> Result<LocaleRules, FormatConfigError> {
    let language = locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    let valid_len = (2..=3).contains(&language.len());
    if !valid_len || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatConfigError::MalformedLocale(locale.to_string()));
    }

    match language.as_str() {
        "en" => Ok(ENGLISH),
        "es" | "de" | "it" | "pt" | "nl" | "ca" => Ok(CONTINENTAL),
        "fr" => Ok(FRENCH),
        _ => Err(FormatConfigError::UnsupportedLocale(locale.to_string())),
    }
}

fn currency_symbol(currency: &str) -> Result<&'static str, FormatConfigError> {
    let code = currency.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatConfigError::MalformedCurrency(currency.to_string()));
    }

    match code.to_ascii_uppercase().as_str() {
        "EUR" => Ok("€"),
        "USD" => Ok("$"),
        "GBP" => Ok("£"),
        "CHF" => Ok("CHF"),
        _ => Err(FormatConfigError::UnsupportedCurrency(currency.to_string())),
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_formatter_rounds_to_cents() {
        assert_eq!(format_price(99.999), "€100.00");
        assert_eq!(format_price(0.0), "€0.00");
        assert_eq!(format_price(12.5), "€12.50");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(1234.5), "€1,234.50");
        assert_eq!(format_price(1_000_000.0), "€1,000,000.00");
        assert_eq!(format_price(-5.0), "-€5.00");
    }

    #[test]
    fn continental_locales_put_the_symbol_last() {
        let formatter = PriceFormatter::new("es-ES", "EUR");
        assert_eq!(formatter.format(1234.5), "1.234,50 €");

        let formatter = PriceFormatter::new("fr", "EUR");
        assert_eq!(formatter.format(1234.5), "1 234,50 €");
    }

    #[test]
    fn other_currencies() {
        assert_eq!(PriceFormatter::new("en_GB", "gbp").format(3.0), "£3.00");
        assert_eq!(PriceFormatter::new("en", "USD").format(10.0), "$10.00");
    }

    #[test]
    fn malformed_configuration_falls_back_to_manual_formatting() {
        let formatter = PriceFormatter::new("en", "EURO");
        assert!(formatter.is_fallback());
        assert_eq!(formatter.format(99.999), "EURO 100.00");

        let formatter = PriceFormatter::new("??", "EUR");
        assert!(formatter.is_fallback());
        assert_eq!(formatter.format(1.0), "EUR 1.00");

        assert_eq!(
            PriceFormatter::try_new("xx", "EUR"),
            Err(FormatConfigError::UnsupportedLocale("xx".to_string()))
        );
        assert_eq!(
            PriceFormatter::try_new("en", "JPY"),
            Err(FormatConfigError::UnsupportedCurrency("JPY".to_string()))
        );
    }
}
