//! Database queries for tenant-facing listings and management.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Category, Picture, Property, Room};

use super::requests::NewProperty;

/// Categories visible to a tenant: global ones always, plus the tenant's
/// own private ones when a tenant id is supplied. Global first, then by id.
pub async fn fetch_categories(pool: &PgPool, tenant_id: Option<i32>) -> Result<Vec<Category>> {
    let categories = match tenant_id {
        Some(tenant) => {
            sqlx::query_as::<_, Category>(
                r#"
                SELECT id, name, tenant_id
                FROM categories
                WHERE tenant_id IS NULL OR tenant_id = $1
                ORDER BY tenant_id IS NOT NULL, id
                "#,
            )
            .bind(tenant)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Category>(
                r#"
                SELECT id, name, tenant_id
                FROM categories
                WHERE tenant_id IS NULL
                ORDER BY id
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(categories)
}

/// Count a tenant's properties (for pagination)
pub async fn count_owned(pool: &PgPool, tenant_id: i32) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM properties
        WHERE tenant_id = $1
        "#,
    )
    .bind(tenant_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// One page of a tenant's properties, newest first
pub async fn fetch_owned(
    pool: &PgPool,
    tenant_id: i32,
    limit: i64,
    offset: i64,
) -> Result<Vec<Property>> {
    let properties = sqlx::query_as::<_, Property>(
        r#"
        SELECT id, name, description, location, city_id, category_id, tenant_id,
               created_at, updated_at
        FROM properties
        WHERE tenant_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(tenant_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(properties)
}

/// All rooms for the given properties, grouped by property id
pub async fn fetch_rooms(
    pool: &PgPool,
    property_ids: &[i32],
) -> Result<HashMap<i32, Vec<Room>>> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT id, property_id, name, description, price, max_guests, quantity, picture
        FROM rooms
        WHERE property_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(property_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i32, Vec<Room>> = HashMap::new();
    for room in rooms {
        grouped.entry(room.property_id).or_default().push(room);
    }
    Ok(grouped)
}

/// All pictures for the given properties, grouped by property id
pub async fn fetch_pictures(
    pool: &PgPool,
    property_ids: &[i32],
) -> Result<HashMap<i32, Vec<Picture>>> {
    let pictures = sqlx::query_as::<_, Picture>(
        r#"
        SELECT id, property_id, file_path, is_main
        FROM pictures
        WHERE property_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(property_ids)
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<i32, Vec<Picture>> = HashMap::new();
    for picture in pictures {
        grouped.entry(picture.property_id).or_default().push(picture);
    }
    Ok(grouped)
}

/// Insert a property owned by the tenant.
///
/// City and category references are stored as given; referential integrity
/// is the database's concern, not this layer's.
pub async fn insert_property(
    pool: &PgPool,
    tenant_id: i32,
    new: &NewProperty,
) -> Result<Property> {
    let property = sqlx::query_as::<_, Property>(
        r#"
        INSERT INTO properties (name, description, location, city_id, category_id, tenant_id,
                                created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
        RETURNING id, name, description, location, city_id, category_id, tenant_id,
                  created_at, updated_at
        "#,
    )
    .bind(&new.name)
    .bind(&new.description)
    .bind(&new.location)
    .bind(new.city_id)
    .bind(new.category_id)
    .bind(tenant_id)
    .fetch_one(pool)
    .await?;

    Ok(property)
}
