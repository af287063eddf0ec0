//! Availability engine for rooms.
//!
//! Pure date and price math over in-memory booking, block-out and seasonal
//! rate records - no database access. The query layer pre-filters records to
//! the window of interest using the same overlap test applied here.

pub mod calendar;
pub mod resolver;

pub use calendar::{days_in_month, expand_calendar, CalendarDay};
pub use resolver::{overlaps, resolve, resolve_price, DateConflicts, RoomAvailability};
