//! StayNest search and listing backend.
//!
//! Guests search available lodging by city, stay window and guest count;
//! tenants manage their property listings. The availability engine is pure
//! computation; persistence lives behind the sqlx query layers.

use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod availability;
pub mod error;
pub mod models;
pub mod search;
pub mod tenant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

/// Assembles the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(search::router())
        .merge(tenant::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
