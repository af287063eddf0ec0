//! Database queries for property search.
//!
//! Nested booking, block-out and rate fetches filter store-side with the
//! same half-open overlap test the resolver applies, and exclude canceled
//! bookings.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::{Booking, City, PeakSeasonRate, Picture, Room, UnavailableDate};

use super::models::{CandidateProperty, CandidateRoom, PropertyHit};

/// City lookup for the search form
pub async fn fetch_cities(pool: &PgPool) -> Result<Vec<City>> {
    let cities = sqlx::query_as::<_, City>(
        r#"
        SELECT id, name, city_type
        FROM cities
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(cities)
}

/// Fetch city-matched properties that have at least one room passing the
/// quantity and guest-count gates, with nested records for the stay window.
pub async fn fetch_candidates(
    pool: &PgPool,
    city_id: i32,
    guests: i32,
    window: (NaiveDate, NaiveDate),
) -> Result<Vec<CandidateProperty>> {
    let hits = sqlx::query_as::<_, PropertyHit>(
        r#"
        SELECT p.id, p.name, p.location, c.name AS category_name
        FROM properties p
        LEFT JOIN categories c ON p.category_id = c.id
        WHERE p.city_id = $1
          AND EXISTS (
            SELECT 1 FROM rooms r
            WHERE r.property_id = p.id
              AND r.quantity > 0
              AND r.max_guests >= $2
          )
        ORDER BY p.id
        "#,
    )
    .bind(city_id)
    .bind(guests)
    .fetch_all(pool)
    .await?;

    assemble(pool, hits, window).await
}

/// Fetch a single property with nested records for the given window.
pub async fn fetch_property(
    pool: &PgPool,
    id: i32,
    window: (NaiveDate, NaiveDate),
) -> Result<Option<CandidateProperty>> {
    let hit = sqlx::query_as::<_, PropertyHit>(
        r#"
        SELECT p.id, p.name, p.location, c.name AS category_name
        FROM properties p
        LEFT JOIN categories c ON p.category_id = c.id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match hit {
        Some(hit) => {
            let mut assembled = assemble(pool, vec![hit], window).await?;
            Ok(assembled.pop())
        }
        None => Ok(None),
    }
}

/// Calendar variant of [`fetch_property`]: the window spans the whole month,
/// `[first day, first day of next month)`.
pub async fn fetch_property_for_calendar(
    pool: &PgPool,
    id: i32,
    month_window: (NaiveDate, NaiveDate),
) -> Result<Option<CandidateProperty>> {
    fetch_property(pool, id, month_window).await
}

/// Attaches rooms, window-filtered records and pictures to the property
/// hits, preserving hit order.
async fn assemble(
    pool: &PgPool,
    hits: Vec<PropertyHit>,
    (start, end): (NaiveDate, NaiveDate),
) -> Result<Vec<CandidateProperty>> {
    if hits.is_empty() {
        return Ok(Vec::new());
    }

    let property_ids: Vec<i32> = hits.iter().map(|h| h.id).collect();

    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT id, property_id, name, description, price, max_guests, quantity, picture
        FROM rooms
        WHERE property_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&property_ids)
    .fetch_all(pool)
    .await?;

    let room_ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();

    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, room_id, check_in, check_out, status
        FROM bookings
        WHERE room_id = ANY($1)
          AND status <> 'canceled'
          AND check_in < $2
          AND check_out > $3
        ORDER BY id
        "#,
    )
    .bind(&room_ids)
    .bind(end)
    .bind(start)
    .fetch_all(pool)
    .await?;

    let blocks = sqlx::query_as::<_, UnavailableDate>(
        r#"
        SELECT id, room_id, start_date, end_date
        FROM unavailable_dates
        WHERE room_id = ANY($1)
          AND start_date < $2
          AND end_date > $3
        ORDER BY id
        "#,
    )
    .bind(&room_ids)
    .bind(end)
    .bind(start)
    .fetch_all(pool)
    .await?;

    let rates = sqlx::query_as::<_, PeakSeasonRate>(
        r#"
        SELECT id, room_id, start_date, end_date, price
        FROM peak_season_rates
        WHERE room_id = ANY($1)
          AND start_date < $2
          AND end_date > $3
        ORDER BY id
        "#,
    )
    .bind(&room_ids)
    .bind(end)
    .bind(start)
    .fetch_all(pool)
    .await?;

    let pictures = sqlx::query_as::<_, Picture>(
        r#"
        SELECT id, property_id, file_path, is_main
        FROM pictures
        WHERE property_id = ANY($1)
        ORDER BY id
        "#,
    )
    .bind(&property_ids)
    .fetch_all(pool)
    .await?;

    let mut bookings_by_room: HashMap<i32, Vec<Booking>> = HashMap::new();
    for b in bookings {
        bookings_by_room.entry(b.room_id).or_default().push(b);
    }

    let mut blocks_by_room: HashMap<i32, Vec<UnavailableDate>> = HashMap::new();
    for u in blocks {
        blocks_by_room.entry(u.room_id).or_default().push(u);
    }

    let mut rates_by_room: HashMap<i32, Vec<PeakSeasonRate>> = HashMap::new();
    for r in rates {
        rates_by_room.entry(r.room_id).or_default().push(r);
    }

    let mut rooms_by_property: HashMap<i32, Vec<CandidateRoom>> = HashMap::new();
    for room in rooms {
        let candidate = CandidateRoom {
            bookings: bookings_by_room.remove(&room.id).unwrap_or_default(),
            blocks: blocks_by_room.remove(&room.id).unwrap_or_default(),
            rates: rates_by_room.remove(&room.id).unwrap_or_default(),
            room,
        };
        rooms_by_property
            .entry(candidate.room.property_id)
            .or_default()
            .push(candidate);
    }

    let mut pictures_by_property: HashMap<i32, Vec<Picture>> = HashMap::new();
    for p in pictures {
        pictures_by_property.entry(p.property_id).or_default().push(p);
    }

    Ok(hits
        .into_iter()
        .map(|hit| CandidateProperty {
            rooms: rooms_by_property.remove(&hit.id).unwrap_or_default(),
            pictures: pictures_by_property.remove(&hit.id).unwrap_or_default(),
            property: hit,
        })
        .collect())
}
