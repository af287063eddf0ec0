//! Booking, block-out and seasonal rate rows

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Booking lifecycle status. Canceled bookings are excluded from every
/// availability computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Canceled,
}

/// Booking of a room unit over `[check_in, check_out)`.
///
/// Check-in is inclusive, check-out exclusive, so the checkout day is never
/// counted as occupied.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

/// Owner-declared block-out over the closed interval `[start_date, end_date]`
/// (maintenance, manual hold), independent of bookings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnavailableDate {
    pub id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Price override for a room over the closed interval `[start_date, end_date]`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PeakSeasonRate {
    pub id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}
