//! Guest-facing property search, detail and calendar views.
//!
//! The query layer fetches city-matched candidates with their nested
//! booking, block-out and rate records pre-filtered to the stay window;
//! the processor resolves per-room availability and drops properties with
//! no eligible rooms; the shaper sorts and paginates the survivors.

pub mod filter;
pub mod models;
pub mod pagination;
pub mod processor;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod service;

pub use pagination::{Page, PageMeta, PAGE_SIZE};
pub use processor::{ProcessedProperty, ProcessedRoom};
pub use routes::router;
