//! Response payloads for search endpoints.
//!
//! Every outcome crosses the transport boundary as a tagged result so the
//! frontend can tell "no matches" from "property has no available rooms"
//! from a plain error.

use serde::Serialize;

use crate::availability::CalendarDay;

use super::pagination::{Page, PageMeta};
use super::processor::ProcessedProperty;

/// Search endpoint response
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Success {
        data: Vec<ProcessedProperty>,
        meta: PageMeta,
    },
    Empty {
        message: String,
    },
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self::Empty {
            message: "No properties match the given criteria".to_string(),
        }
    }
}

impl From<Page<ProcessedProperty>> for SearchResponse {
    fn from(page: Page<ProcessedProperty>) -> Self {
        Self::Success {
            data: page.data,
            meta: page.meta,
        }
    }
}

/// Property detail response
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailResponse {
    Success {
        data: ProcessedProperty,
    },
    NoRoomsAvailable {
        id: i32,
        name: String,
        message: String,
    },
}

impl DetailResponse {
    pub fn no_rooms(id: i32, name: String) -> Self {
        Self::NoRoomsAvailable {
            id,
            name,
            message: "This property has no available rooms for the requested stay".to_string(),
        }
    }
}

/// City lookup response
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub data: Vec<crate::models::City>,
}

/// One room's month calendar
#[derive(Debug, Serialize)]
pub struct RoomCalendar {
    pub room_id: i32,
    pub room_name: String,
    pub days: Vec<CalendarDay>,
}

/// Calendar response: per-room day expansion wrapped with the property
/// identity and the echoed year/month.
#[derive(Debug, Serialize)]
pub struct PropertyCalendar {
    pub property_id: i32,
    pub property_name: String,
    pub year: i32,
    pub month: u32,
    pub rooms: Vec<RoomCalendar>,
}
