//! Search orchestration over the query layer and the pure core.

use sqlx::PgPool;

use crate::availability;
use crate::error::{AppError, Result};

use super::pagination::{self, Page, PAGE_SIZE};
use super::processor::{self, ProcessedProperty, StayQuery};
use super::queries;
use super::requests::{CalendarQuery, SearchQuery};
use super::responses::{PropertyCalendar, RoomCalendar};

/// Outcome of a search: a shaped page, or the distinct empty-result signal.
/// Zero matches never reach the pagination range check.
#[derive(Debug)]
pub enum SearchOutcome {
    Page(Page<ProcessedProperty>),
    Empty,
}

/// Outcome of a detail lookup on an existing property. A missing property
/// surfaces as [`AppError::NotFound`] instead.
#[derive(Debug)]
pub enum DetailOutcome {
    Found(ProcessedProperty),
    NoRoomsAvailable { id: i32, name: String },
}

pub async fn search(pool: &PgPool, query: SearchQuery) -> Result<SearchOutcome> {
    let candidates = queries::fetch_candidates(
        pool,
        query.city_id,
        query.stay.guests,
        (query.stay.check_in, query.stay.check_out),
    )
    .await?;

    let mut properties = processor::process_properties(&candidates, &query.filter, &query.stay);
    if properties.is_empty() {
        return Ok(SearchOutcome::Empty);
    }

    if let Some((key, order)) = query.sort {
        pagination::sort_properties(&mut properties, key, order);
    }

    let page = pagination::paginate(properties, query.page, PAGE_SIZE)?;
    Ok(SearchOutcome::Page(page))
}

pub async fn detail(pool: &PgPool, id: i32, stay: StayQuery) -> Result<DetailOutcome> {
    let candidate = queries::fetch_property(pool, id, (stay.check_in, stay.check_out))
        .await?
        .ok_or(AppError::NotFound)?;

    match processor::process_property(&candidate, &stay) {
        Some(property) => Ok(DetailOutcome::Found(property)),
        None => Ok(DetailOutcome::NoRoomsAvailable {
            id: candidate.property.id,
            name: candidate.property.name,
        }),
    }
}

pub async fn calendar(pool: &PgPool, id: i32, query: CalendarQuery) -> Result<PropertyCalendar> {
    let candidate = queries::fetch_property_for_calendar(pool, id, query.window)
        .await?
        .ok_or(AppError::NotFound)?;

    let rooms = candidate
        .rooms
        .iter()
        .map(|r| RoomCalendar {
            room_id: r.room.id,
            room_name: r.room.name.clone(),
            days: availability::expand_calendar(
                &r.room,
                &r.bookings,
                &r.blocks,
                &r.rates,
                query.year,
                query.month,
            ),
        })
        .collect();

    Ok(PropertyCalendar {
        property_id: candidate.property.id,
        property_name: candidate.property.name,
        year: query.year,
        month: query.month,
        rooms,
    })
}
