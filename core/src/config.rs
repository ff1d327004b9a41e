// SPDX-License-Identifier: GPL-3.0-only

use std::{env, path::PathBuf};

use abs_utils::currency::{DEFAULT_CURRENCY, DEFAULT_LOCALE, PriceFormatter};

/// Runtime configuration, read from the environment (and a `.env` file if present)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Content backend connection string, `None` runs on mock data only
    pub database_url: Option<String>,
    /// Primary language subtag, content is stored per language (`es`, not `es-ES`)
    pub locale: String,
    pub currency: String,
    /// Where the demo auth flag is stored
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Load .env file
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            database_url: non_empty("DATABASE_URL"),
            locale: non_empty("ABS_LOCALE")
                .map(|locale| language_of(&locale))
                .unwrap_or(defaults.locale),
            currency: non_empty("ABS_CURRENCY").unwrap_or(defaults.currency),
            data_dir: non_empty("ABS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }

    pub fn set_locale(&mut self, locale: &str) {
        self.locale = language_of(locale);
    }

    pub fn price_formatter(&self) -> PriceFormatter {
        PriceFormatter::new(&self.locale, &self.currency)
    }
}

fn language_of(locale: &str) -> String {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("abs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_variables_and_ignores_blank_ones() {
        let vars = HashMap::from([
            ("DATABASE_URL", "postgres://localhost/abs"),
            ("ABS_LOCALE", "es"),
            ("ABS_CURRENCY", " "),
            ("ABS_DATA_DIR", "/tmp/abs-test"),
        ]);
        let config = AppConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/abs"));
        assert_eq!(config.locale, "es");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/abs-test"));
        assert_eq!(config.price_formatter().format(10.0), "10,00 €");
    }

    #[test]
    fn locales_keep_only_the_language() {
        let config =
            AppConfig::from_vars(|key| (key == "ABS_LOCALE").then(|| "es-ES".to_string()));
        assert_eq!(config.locale, "es");
        assert_eq!(config.price_formatter().format(10.0), "10,00 €");

        let mut config = AppConfig::default();
        config.set_locale(" pt_BR");
        assert_eq!(config.locale, "pt");
        config.set_locale("DE");
        assert_eq!(config.locale, "de");
    }

    #[test]
    fn defaults_to_mock_mode() {
        let config = AppConfig::from_vars(|_| None);
        assert!(config.database_url.is_none());
        assert_eq!(config.locale, "en");
    }
}
