// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::sync::Arc;

use super::decode_pricing_unit;
use crate::pricing::PricingUnit;

/// A room customization (bed type, view, pillows...).
/// Options sharing a category are mutually exclusive.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOption {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub unit: PricingUnit,
    pub icon: Option<String>,
}

impl CustomizationOption {
    pub async fn get_all(
        pool: Arc<PgPool>,
        locale: String,
    ) -> Result<Vec<CustomizationOption>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, category, title, description, price, pricing_unit, icon
            FROM customization_options
            WHERE is_active = $1 AND locale = $2
            ORDER BY category ASC, sort_order ASC, id ASC",
        )
        .bind(true)
        .bind(locale)
        .fetch_all(pool.as_ref())
        .await?;

        let mut result = Vec::<CustomizationOption>::new();

        for row in rows {
            let unit = decode_pricing_unit(&row, "pricing_unit")?;

            result.push(CustomizationOption {
                id: row.try_get("id")?,
                category: row.try_get("category")?,
                title: row.try_get("title")?,
                description: row.try_get("description")?,
                price: row.try_get("price")?,
                unit,
                icon: row.try_get("icon")?,
            });
        }

        Ok(result)
    }
}

/// Groups the options by category, keeping the order in which categories first appear
pub fn group_by_category(
    options: &[CustomizationOption],
) -> Vec<(&str, Vec<&CustomizationOption>)> {
    let mut groups: Vec<(&str, Vec<&CustomizationOption>)> = Vec::new();
    for option in options {
        match groups.iter_mut().find(|(c, _)| *c == option.category) {
            Some((_, members)) => members.push(option),
            None => groups.push((&option.category, vec![option])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, category: &str) -> CustomizationOption {
        CustomizationOption {
            id: id.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let options = vec![
            option("king", "bed"),
            option("sea", "view"),
            option("twin", "bed"),
        ];
        let groups = group_by_category(&options);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "bed");
        assert_eq!(
            groups[0].1.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
            vec!["king", "twin"]
        );
        assert_eq!(groups[1].0, "view");
    }
}
