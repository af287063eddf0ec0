//! Search route handlers

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::error::Result;
use crate::AppState;

use super::queries;
use super::requests::{CalendarParams, SearchParams, StayParams};
use super::responses::{CitiesResponse, DetailResponse, PropertyCalendar, SearchResponse};
use super::service::{self, DetailOutcome, SearchOutcome};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cities", get(cities))
        .route("/properties", get(search))
        .route("/properties/:id", get(detail))
        .route("/properties/:id/calendar", get(calendar))
}

async fn cities(State(state): State<AppState>) -> Result<Json<CitiesResponse>> {
    let data = queries::fetch_cities(&state.db).await?;
    Ok(Json(CitiesResponse { data }))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = params.validate(Utc::now().date_naive())?;
    let response = match service::search(&state.db, query).await? {
        SearchOutcome::Page(page) => SearchResponse::from(page),
        SearchOutcome::Empty => SearchResponse::empty(),
    };
    Ok(Json(response))
}

async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<StayParams>,
) -> Result<Json<DetailResponse>> {
    let stay = params.validate(Utc::now().date_naive())?;
    let response = match service::detail(&state.db, id, stay).await? {
        DetailOutcome::Found(property) => DetailResponse::Success { data: property },
        DetailOutcome::NoRoomsAvailable { id, name } => DetailResponse::no_rooms(id, name),
    };
    Ok(Json(response))
}

async fn calendar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CalendarParams>,
) -> Result<Json<PropertyCalendar>> {
    let query = params.validate()?;
    let calendar = service::calendar(&state.db, id, query).await?;
    Ok(Json(calendar))
}
