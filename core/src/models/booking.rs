// SPDX-License-Identifier: GPL-3.0-only

use abs_utils::date::nights_between;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// One room of a reservation
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRoom {
    pub id: String,
    /// The room type originally booked
    pub room_type_id: String,
    pub room_name: String,
    pub adults: u32,
    pub children: u32,
}

impl BookingRoom {
    pub fn guests(&self) -> u32 {
        (self.adults + self.children).max(1)
    }
}

/// A reservation as found by its code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    pub reservation_code: String,
    pub guest_name: String,
    pub guest_email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: Vec<BookingRoom>,
}

impl BookingInfo {
    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }

    pub fn is_multi_room(&self) -> bool {
        self.rooms.len() > 1
    }

    pub fn room(&self, id: &str) -> Option<&BookingRoom> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Looks a reservation up by its upper cased code,
    /// see [`crate::auth::validate_reservation_code`]
    pub async fn get_by_code(
        pool: Arc<PgPool>,
        reservation_code: String,
    ) -> Result<Option<BookingInfo>, sqlx::Error> {
        let Some(row) = sqlx::query(
            "SELECT reservation_code, guest_name, guest_email, check_in, check_out
            FROM bookings
            WHERE UPPER(reservation_code) = $1",
        )
        .bind(&reservation_code)
        .fetch_optional(pool.as_ref())
        .await?
        else {
            return Ok(None);
        };

        let room_rows = sqlx::query(
            "SELECT id, room_type_id, room_name, adults, children
            FROM booking_rooms
            WHERE UPPER(reservation_code) = $1
            ORDER BY sort_order ASC, id ASC",
        )
        .bind(&reservation_code)
        .fetch_all(pool.as_ref())
        .await?;

        let mut rooms = Vec::new();
        for room_row in room_rows {
            let adults: i32 = room_row.try_get("adults")?;
            let children: i32 = room_row.try_get("children")?;
            rooms.push(BookingRoom {
                id: room_row.try_get("id")?,
                room_type_id: room_row.try_get("room_type_id")?,
                room_name: room_row.try_get("room_name")?,
                adults: u32::try_from(adults).unwrap_or_default(),
                children: u32::try_from(children).unwrap_or_default(),
            });
        }

        Ok(Some(BookingInfo {
            reservation_code: row.try_get("reservation_code")?,
            guest_name: row.try_get("guest_name")?,
            guest_email: row.try_get("guest_email")?,
            check_in: row.try_get("check_in")?,
            check_out: row.try_get("check_out")?,
            rooms,
        }))
    }
}
