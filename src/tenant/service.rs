//! Tenant service functions over the query layer.

use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::{Category, Property};
use crate::search::{Page, PageMeta, PAGE_SIZE};

use super::queries;
use super::requests::NewProperty;
use super::responses::OwnedProperty;

/// Outcome of an owned-properties listing: a page, or the distinct
/// empty-result signal. A tenant with zero properties never reaches the
/// pagination range check.
#[derive(Debug)]
pub enum OwnedOutcome {
    Page(Page<OwnedProperty>),
    Empty,
}

pub async fn categories(pool: &PgPool, tenant_id: Option<i32>) -> Result<Vec<Category>> {
    queries::fetch_categories(pool, tenant_id).await
}

pub async fn list_owned(pool: &PgPool, tenant_id: i32, page: i64) -> Result<OwnedOutcome> {
    let total = queries::count_owned(pool, tenant_id).await?;
    if total == 0 {
        return Ok(OwnedOutcome::Empty);
    }

    let meta = PageMeta::new(page, total, PAGE_SIZE);
    if page > meta.total_pages {
        return Err(AppError::PageOutOfRange {
            requested: page,
            total_pages: meta.total_pages,
        });
    }

    let offset = (page - 1) * PAGE_SIZE;
    let properties = queries::fetch_owned(pool, tenant_id, PAGE_SIZE, offset).await?;

    let property_ids: Vec<i32> = properties.iter().map(|p| p.id).collect();
    let mut rooms = queries::fetch_rooms(pool, &property_ids).await?;
    let mut pictures = queries::fetch_pictures(pool, &property_ids).await?;

    let data = properties
        .into_iter()
        .map(|property| {
            let rooms = rooms.remove(&property.id).unwrap_or_default();
            OwnedProperty {
                pictures: pictures.remove(&property.id).unwrap_or_default(),
                room_count: rooms.len(),
                rooms,
                property,
            }
        })
        .collect();

    Ok(OwnedOutcome::Page(Page { data, meta }))
}

pub async fn create(pool: &PgPool, tenant_id: i32, new: NewProperty) -> Result<Property> {
    let property = queries::insert_property(pool, tenant_id, &new).await?;
    tracing::info!(
        property_id = property.id,
        tenant_id,
        "property created"
    );
    Ok(property)
}
