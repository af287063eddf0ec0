//! Tenant-facing management: categories, owned listings and creation.
//!
//! Owner views skip availability filtering entirely; a tenant sees all of
//! their rooms regardless of bookings.

pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod service;

pub use routes::router;
