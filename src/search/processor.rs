//! Aggregation of candidate properties into search output.
//!
//! Pure functions over fetched candidates - no database access. The query
//! layer delivers city-matched properties with window-filtered records;
//! this module applies the name/category predicate, resolves per-room
//! availability and normalizes the survivors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::availability;

use super::filter::PropertyFilter;
use super::models::{CandidateProperty, CandidateRoom};

/// Validated stay window and party size
#[derive(Debug, Clone, Copy)]
pub struct StayQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

/// Seasonal override window echoed on an eligible room
#[derive(Debug, Clone, Serialize)]
pub struct RateWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Eligible room in a search or detail result.
///
/// `price` is resolved at the check-in date. `dates_free` and the conflict
/// counts carry the second availability tier: the room type is listed, and
/// these say whether the requested dates are actually untouched.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedRoom {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub max_guests: i32,
    pub quantity: i32,
    pub picture: Option<String>,
    pub dates_free: bool,
    pub overlapping_bookings: usize,
    pub blocked_dates: usize,
    pub peak_rates: Vec<RateWindow>,
}

/// Normalized property in search output
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedProperty {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub category_name: Option<String>,
    /// Path of the first picture flagged as main, if any.
    pub main_picture: Option<String>,
    /// Rooms that passed the listing gates, annotated per the stay window.
    pub rooms: Vec<ProcessedRoom>,
    /// Total room types on the property, before eligibility filtering.
    pub room_count: usize,
}

impl ProcessedProperty {
    /// Minimum eligible room price; the representative value for price
    /// sorting. Processed properties always carry at least one room.
    pub fn representative_price(&self) -> Decimal {
        self.rooms
            .iter()
            .map(|r| r.price)
            .min()
            .unwrap_or(Decimal::ZERO)
    }
}

fn process_room(candidate: &CandidateRoom, stay: &StayQuery) -> Option<ProcessedRoom> {
    let resolved = availability::resolve(
        &candidate.room,
        &candidate.bookings,
        &candidate.blocks,
        &candidate.rates,
        stay.check_in,
        stay.check_out,
        stay.guests,
    );

    if !resolved.is_listed {
        return None;
    }

    Some(ProcessedRoom {
        id: candidate.room.id,
        name: candidate.room.name.clone(),
        price: resolved.nightly_price,
        base_price: candidate.room.price,
        max_guests: candidate.room.max_guests,
        quantity: candidate.room.quantity,
        picture: candidate.room.picture.clone(),
        dates_free: resolved.conflicts.is_free(),
        overlapping_bookings: resolved.conflicts.booking_count,
        blocked_dates: resolved.conflicts.block_count,
        peak_rates: candidate
            .rates
            .iter()
            .map(|r| RateWindow {
                start_date: r.start_date,
                end_date: r.end_date,
                price: r.price,
            })
            .collect(),
    })
}

/// Normalizes one candidate, or `None` when no room passes the listing
/// gates. A property is never shown with an empty room list.
pub fn process_property(
    candidate: &CandidateProperty,
    stay: &StayQuery,
) -> Option<ProcessedProperty> {
    let rooms: Vec<ProcessedRoom> = candidate
        .rooms
        .iter()
        .filter_map(|r| process_room(r, stay))
        .collect();

    if rooms.is_empty() {
        return None;
    }

    Some(ProcessedProperty {
        id: candidate.property.id,
        name: candidate.property.name.clone(),
        location: candidate.property.location.clone(),
        category_name: candidate.property.category_name.clone(),
        main_picture: candidate
            .pictures
            .iter()
            .find(|p| p.is_main)
            .map(|p| p.file_path.clone()),
        rooms,
        room_count: candidate.rooms.len(),
    })
}

/// Applies the name/category predicate and availability processing to the
/// fetched candidates, preserving fetch order.
pub fn process_properties(
    candidates: &[CandidateProperty],
    filter: &PropertyFilter,
    stay: &StayQuery,
) -> Vec<ProcessedProperty> {
    candidates
        .iter()
        .filter(|c| {
            filter.matches(
                &c.property.name,
                c.property.category_name.as_deref(),
            )
        })
        .filter_map(|c| process_property(c, stay))
        .collect()
}
