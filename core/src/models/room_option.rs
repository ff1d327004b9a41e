// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::{fmt, sync::Arc};

/// A room the guest can upgrade to, shown on the room carousel
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomOption {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Upgrade price per night
    pub price: f64,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub size_m2: Option<i32>,
    pub max_guests: Option<i32>,
}

impl fmt::Display for RoomOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl RoomOption {
    /// Whether `guests` people fit in this room (rooms without a limit fit everyone)
    pub fn fits(&self, guests: u32) -> bool {
        self.max_guests
            .is_none_or(|max| i64::from(max) >= i64::from(guests))
    }

    pub async fn get_all(
        pool: Arc<PgPool>,
        locale: String,
    ) -> Result<Vec<RoomOption>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT id, title, description, price, images, amenities, size_m2, max_guests
            FROM room_types
            WHERE is_active = $1 AND locale = $2
            ORDER BY sort_order ASC, id ASC",
        )
        .bind(true)
        .bind(locale)
        .fetch_all(pool.as_ref())
        .await?;

        let mut result = Vec::<RoomOption>::new();

        for row in rows {
            result.push(RoomOption {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                description: row.try_get("description")?,
                price: row.try_get("price")?,
                images: row.try_get("images")?,
                amenities: row.try_get("amenities")?,
                size_m2: row.try_get("size_m2")?,
                max_guests: row.try_get("max_guests")?,
            });
        }

        Ok(result)
    }
}
