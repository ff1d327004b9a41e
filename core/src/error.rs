// SPDX-License-Identifier: GPL-3.0-only

use chrono::NaiveDate;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid stored data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid reservation code")]
    InvalidReservationCode,
    #[error("no booking found for reservation code {0}")]
    UnknownBooking(String),
    #[error("order {0} not found")]
    UnknownOrder(String),
    #[error("order {0} belongs to another reservation")]
    OrderNotAccessible(String),
    #[error("nothing has been selected yet")]
    EmptyOrder,
}

/// Rejections produced by the selection state machine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unknown item {0}")]
    UnknownItem(String),
    #[error("unknown booking room {0}")]
    UnknownRoom(String),
    #[error("the booking has no rooms")]
    EmptyBooking,
    #[error("{option} requires {missing} to be selected first")]
    Requires { option: String, missing: String },
    #[error("quantity must be greater than zero")]
    NothingSelected,
    #[error("offer {0} needs a date")]
    MissingDate(String),
    #[error("{0} is outside of the stay")]
    DateOutsideStay(NaiveDate),
}
