//! Response payloads for tenant endpoints.

use serde::Serialize;

use crate::models::{Category, Picture, Property, Room};
use crate::search::PageMeta;

/// A tenant's property with its full room and picture arrays; no
/// availability filtering applied.
#[derive(Debug, Serialize)]
pub struct OwnedProperty {
    #[serde(flatten)]
    pub property: Property,
    pub rooms: Vec<Room>,
    pub pictures: Vec<Picture>,
    pub room_count: usize,
}

/// Owned-properties listing response
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OwnedListResponse {
    Success {
        data: Vec<OwnedProperty>,
        meta: PageMeta,
    },
    Empty {
        message: String,
    },
}

impl OwnedListResponse {
    pub fn empty() -> Self {
        Self::Empty {
            message: "You have no properties yet".to_string(),
        }
    }
}

/// Category listing response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub data: Vec<Category>,
}

/// Create-property response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub data: Property,
}
