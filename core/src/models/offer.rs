// SPDX-License-Identifier: GPL-3.0-only

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::{fmt, sync::Arc};

use super::decode_pricing_unit;
use crate::pricing::PricingUnit;

/// A special offer the guest can add to the stay (spa, dinner, late checkout...)
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferType {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub unit: PricingUnit,
    /// Upper bound for the quantity control, `None` means unbounded
    pub max_quantity: Option<u32>,
    /// The guest must pick the date(s) the offer is enjoyed on
    pub requires_date: bool,
    pub image: Option<String>,
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl OfferType {
    /// Per night offers are enjoyed on several dates, the rest on a single one
    pub fn uses_multiple_dates(&self) -> bool {
        self.unit == PricingUnit::PerNight
    }

    pub async fn get_all(pool: Arc<PgPool>, locale: String) -> Result<Vec<OfferType>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, title, description, price, pricing_unit, max_quantity, requires_date, image
            FROM special_offers
            WHERE is_active = $1 AND locale = $2
            ORDER BY sort_order ASC, id ASC",
        )
        .bind(true)
        .bind(locale)
        .fetch_all(pool.as_ref())
        .await?;

        let mut result = Vec::<OfferType>::new();

        for row in rows {
            let max_quantity: Option<i32> = row.try_get("max_quantity")?;

            result.push(OfferType {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                description: row.try_get("description")?,
                price: row.try_get("price")?,
                unit: decode_pricing_unit(&row, "pricing_unit")?,
                max_quantity: max_quantity.and_then(|q| u32::try_from(q).ok()),
                requires_date: row.try_get("requires_date")?,
                image: row.try_get("image")?,
            });
        }

        Ok(result)
    }
}

/// The state of the controls of one offer card
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSelection {
    pub quantity: u32,
    pub persons: u32,
    pub nights: u32,
    /// Single date offers
    pub date: Option<NaiveDate>,
    /// Per night offers
    pub dates: Vec<NaiveDate>,
    /// Set by "Book Now", cleared whenever any other field changes
    pub booked: bool,
}

impl OfferSelection {
    /// Starting values of an offer card for a stay
    pub fn for_stay(persons: u32, nights: u32) -> Self {
        Self {
            quantity: 1,
            persons: persons.max(1),
            nights: nights.max(1),
            date: None,
            dates: Vec::new(),
            booked: false,
        }
    }

    /// Booked offers are the ones that reach the pricing panel
    pub fn is_booked(&self) -> bool {
        self.booked && self.quantity > 0
    }
}
