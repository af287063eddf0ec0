//! Typed projections returned by the search query layer.
//!
//! Each fetch has an explicit shape instead of ad-hoc field selection, so
//! call sites cannot drift apart silently.

use sqlx::FromRow;

use crate::models::{Booking, PeakSeasonRate, Picture, Room, UnavailableDate};

/// Property row as selected for search candidates, with the category name
/// already joined in.
#[derive(Debug, Clone, FromRow)]
pub struct PropertyHit {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub category_name: Option<String>,
}

/// A room with its records pre-filtered to the query window.
///
/// Bookings exclude canceled rows; bookings, block-outs and rates are all
/// filtered store-side with the same half-open overlap test the resolver
/// applies.
#[derive(Debug, Clone)]
pub struct CandidateRoom {
    pub room: Room,
    pub bookings: Vec<Booking>,
    pub blocks: Vec<UnavailableDate>,
    pub rates: Vec<PeakSeasonRate>,
}

/// A city-matched property with nested rooms and pictures, ready for
/// availability processing.
#[derive(Debug, Clone)]
pub struct CandidateProperty {
    pub property: PropertyHit,
    pub rooms: Vec<CandidateRoom>,
    pub pictures: Vec<Picture>,
}
