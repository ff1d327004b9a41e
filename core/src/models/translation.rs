// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::{collections::HashMap, sync::Arc};

/// CMS managed strings of one locale, they take precedence over the bundled ones
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translations {
    pub locale: String,
    pub entries: HashMap<String, String>,
}

impl Translations {
    pub fn new(locale: &str, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            locale: locale.to_string(),
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The CMS string for `key`, or `fallback` when there is none
    pub fn resolve(&self, key: &str, fallback: impl Into<String>) -> String {
        self.get(key)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.into())
    }

    pub async fn get_all(pool: Arc<PgPool>, locale: String) -> Result<Translations, sqlx::Error> {
        let rows = sqlx::query("SELECT key, value FROM translations WHERE locale = $1")
            .bind(&locale)
            .fetch_all(pool.as_ref())
            .await?;

        let mut entries = HashMap::new();
        for row in rows {
            entries.insert(row.try_get("key")?, row.try_get("value")?);
        }

        Ok(Translations { locale, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_cms_strings() {
        let translations = Translations::new(
            "en",
            [("offers.title".to_string(), "Treat yourself".to_string())],
        );

        assert_eq!(translations.resolve("offers.title", "Special offers"), "Treat yourself");
        assert_eq!(translations.resolve("rooms.title", "Rooms"), "Rooms");
    }
}
