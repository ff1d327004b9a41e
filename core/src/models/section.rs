// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::{str::FromStr, sync::Arc};

/// The customizable sections of the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Rooms,
    Customizations,
    Offers,
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rooms" | "room_selection" => Ok(SectionKind::Rooms),
            "customizations" | "room_customization" => Ok(SectionKind::Customizations),
            "offers" | "special_offers" => Ok(SectionKind::Offers),
            _ => Err(format!("unknown section '{s}'")),
        }
    }
}

/// Whether a section is shown, and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub section: SectionKind,
    pub enabled: bool,
    pub sort_order: i32,
    /// Translation key of the section title
    pub title_key: String,
}

impl SectionConfig {
    pub async fn get_all(pool: Arc<PgPool>) -> Result<Vec<SectionConfig>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT section, enabled, sort_order, title_key
            FROM section_config
            ORDER BY sort_order ASC",
        )
        .fetch_all(pool.as_ref())
        .await?;

        let mut result = Vec::<SectionConfig>::new();

        for row in rows {
            let section: String = row.try_get("section")?;
            // Sections this front-end doesn't know about are ignored
            let Ok(section) = section.parse::<SectionKind>() else {
                tracing::warn!("ignoring unknown section '{section}'");
                continue;
            };

            result.push(SectionConfig {
                section,
                enabled: row.try_get("enabled")?,
                sort_order: row.try_get("sort_order")?,
                title_key: row.try_get("title_key")?,
            });
        }

        Ok(result)
    }
}
