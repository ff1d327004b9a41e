// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    /// Selecting the option deselects the target (and the other way around)
    Excludes,
    /// The option can only be selected while the target is selected
    Requires,
}

/// A relation between two customization options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRule {
    pub option_id: String,
    pub target_id: String,
    pub kind: RuleKind,
}

impl CompatibilityRule {
    pub fn excludes(option_id: &str, target_id: &str) -> Self {
        Self {
            option_id: option_id.to_string(),
            target_id: target_id.to_string(),
            kind: RuleKind::Excludes,
        }
    }

    pub fn requires(option_id: &str, target_id: &str) -> Self {
        Self {
            option_id: option_id.to_string(),
            target_id: target_id.to_string(),
            kind: RuleKind::Requires,
        }
    }

    pub async fn get_all(pool: Arc<PgPool>) -> Result<Vec<CompatibilityRule>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT option_id, target_id, kind FROM compatibility_rules ORDER BY id ASC",
        )
        .fetch_all(pool.as_ref())
        .await?;

        let mut result = Vec::<CompatibilityRule>::new();

        for row in rows {
            let kind: String = row.try_get("kind")?;
            let kind = match kind.as_str() {
                "excludes" => RuleKind::Excludes,
                "requires" => RuleKind::Requires,
                other => {
                    tracing::warn!("ignoring compatibility rule of unknown kind '{other}'");
                    continue;
                }
            };

            result.push(CompatibilityRule {
                option_id: row.try_get("option_id")?,
                target_id: row.try_get("target_id")?,
                kind,
            });
        }

        Ok(result)
    }
}
