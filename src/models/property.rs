//! Property, room and picture rows

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Property listing from the properties table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub city_id: Option<i32>,
    pub category_id: Option<i32>,
    pub tenant_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Room type belonging to a property.
///
/// `quantity` is the number of identical units of this room type. A room
/// with quantity 0 is never offered to guests.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: i32,
    pub property_id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub max_guests: i32,
    pub quantity: i32,
    pub picture: Option<String>,
}

/// Property picture; at most one per property carries `is_main`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Picture {
    pub id: i32,
    pub property_id: i32,
    pub file_path: String,
    pub is_main: bool,
}
