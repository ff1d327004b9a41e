// SPDX-License-Identifier: GPL-3.0-only

pub mod booking;
pub mod compatibility_rule;
pub mod customization;
pub mod offer;
pub mod room_option;
pub mod section;
pub mod translation;

use sqlx::{Row, postgres::PgRow};

use crate::pricing::PricingUnit;

/// Reads a `perStay`/`perPerson`/`perNight` text column
pub(crate) fn decode_pricing_unit(row: &PgRow, column: &str) -> Result<PricingUnit, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    raw.parse::<PricingUnit>()
        .map_err(|err| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: err.into(),
        })
}
