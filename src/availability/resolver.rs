//! Room availability resolution over a query window.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Booking, BookingStatus, PeakSeasonRate, Room, UnavailableDate};

/// Half-open overlap test shared by every record kind.
///
/// A record `[start, end)` overlaps the query window `[query_start, query_end)`
/// iff `start < query_end && end > query_start`. The same test is applied to
/// block-outs and seasonal rates even though those are stored as closed
/// intervals; the query layer filters with the identical condition.
pub fn overlaps(
    start: NaiveDate,
    end: NaiveDate,
    query_start: NaiveDate,
    query_end: NaiveDate,
) -> bool {
    start < query_end && end > query_start
}

/// Date-conflict signal for a room over a query window.
///
/// Conflicts do not remove a room from listings; they are carried alongside
/// so detail and calendar views can surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateConflicts {
    /// Non-canceled bookings overlapping the window.
    pub booking_count: usize,
    /// Owner block-outs overlapping the window.
    pub block_count: usize,
}

impl DateConflicts {
    /// True when no booking or block-out touches the window.
    pub fn is_free(&self) -> bool {
        self.booking_count == 0 && self.block_count == 0
    }
}

/// Result of resolving one room against a query window.
///
/// Two separate tiers: `is_listed` says whether the room type is offered at
/// all (quantity and guest-count gates only), while `conflicts` says what
/// date collisions exist inside the window. The tiers are never conflated
/// into a single flag.
#[derive(Debug, Clone)]
pub struct RoomAvailability {
    pub is_listed: bool,
    pub conflicts: DateConflicts,
    /// Nightly price resolved at the check-in date.
    pub nightly_price: Decimal,
}

/// Resolves a room's availability for `[query_start, query_end)`.
///
/// The caller guarantees `query_start < query_end` (validated upstream).
/// Listing is keyed only on `quantity > 0` and `max_guests >= guests`;
/// overlapping bookings never unlist a room type, they only raise the
/// conflict counts.
pub fn resolve(
    room: &Room,
    bookings: &[Booking],
    blocks: &[UnavailableDate],
    rates: &[PeakSeasonRate],
    query_start: NaiveDate,
    query_end: NaiveDate,
    guests: i32,
) -> RoomAvailability {
    let booking_count = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Canceled)
        .filter(|b| overlaps(b.check_in, b.check_out, query_start, query_end))
        .count();

    let block_count = blocks
        .iter()
        .filter(|u| overlaps(u.start_date, u.end_date, query_start, query_end))
        .count();

    RoomAvailability {
        is_listed: room.quantity > 0 && room.max_guests >= guests,
        conflicts: DateConflicts {
            booking_count,
            block_count,
        },
        nightly_price: resolve_price(room.price, rates, query_start),
    }
}

/// Resolves the nightly price for a single date.
///
/// The first rate in fetch order whose closed interval contains the date
/// wins; otherwise the base price applies. Overlapping rate windows are not
/// rejected upstream, so fetch order (id ascending) is the tie-break.
pub fn resolve_price(base: Decimal, rates: &[PeakSeasonRate], date: NaiveDate) -> Decimal {
    rates
        .iter()
        .find(|r| r.start_date <= date && date <= r.end_date)
        .map(|r| r.price)
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(price: Decimal, max_guests: i32, quantity: i32) -> Room {
        Room {
            id: 1,
            property_id: 1,
            name: "Garden Suite".to_string(),
            description: None,
            price,
            max_guests,
            quantity,
            picture: None,
        }
    }

    fn booking(check_in: NaiveDate, check_out: NaiveDate, status: BookingStatus) -> Booking {
        Booking {
            id: 1,
            room_id: 1,
            check_in,
            check_out,
            status,
        }
    }

    fn rate(id: i32, start: NaiveDate, end: NaiveDate, price: Decimal) -> PeakSeasonRate {
        PeakSeasonRate {
            id,
            room_id: 1,
            start_date: start,
            end_date: end,
            price,
        }
    }

    // ==================== overlaps tests ====================

    #[test]
    fn test_overlap_inside_window() {
        assert!(overlaps(
            date(2026, 9, 3),
            date(2026, 9, 5),
            date(2026, 9, 1),
            date(2026, 9, 10)
        ));
    }

    #[test]
    fn test_overlap_spanning_window() {
        assert!(overlaps(
            date(2026, 8, 20),
            date(2026, 9, 20),
            date(2026, 9, 1),
            date(2026, 9, 10)
        ));
    }

    #[test]
    fn test_no_overlap_when_end_equals_query_start() {
        // Checkout on the query's check-in day leaves the room free.
        assert!(!overlaps(
            date(2026, 8, 28),
            date(2026, 9, 1),
            date(2026, 9, 1),
            date(2026, 9, 10)
        ));
    }

    #[test]
    fn test_no_overlap_when_start_equals_query_end() {
        assert!(!overlaps(
            date(2026, 9, 10),
            date(2026, 9, 12),
            date(2026, 9, 1),
            date(2026, 9, 10)
        ));
    }

    #[test]
    fn test_overlap_single_night() {
        assert!(overlaps(
            date(2026, 9, 9),
            date(2026, 9, 10),
            date(2026, 9, 1),
            date(2026, 9, 10)
        ));
    }

    // ==================== resolve tests ====================

    #[test]
    fn test_zero_quantity_never_listed() {
        let r = room(dec!(120), 4, 0);
        let result = resolve(&r, &[], &[], &[], date(2026, 9, 1), date(2026, 9, 5), 2);
        assert!(!result.is_listed);
    }

    #[test]
    fn test_guest_count_gate() {
        let r = room(dec!(120), 2, 3);
        let result = resolve(&r, &[], &[], &[], date(2026, 9, 1), date(2026, 9, 5), 3);
        assert!(!result.is_listed);

        let result = resolve(&r, &[], &[], &[], date(2026, 9, 1), date(2026, 9, 5), 2);
        assert!(result.is_listed);
    }

    #[test]
    fn test_overlapping_booking_keeps_room_listed() {
        let r = room(dec!(120), 4, 1);
        let bookings = vec![booking(
            date(2026, 9, 2),
            date(2026, 9, 4),
            BookingStatus::Confirmed,
        )];
        let result = resolve(
            &r,
            &bookings,
            &[],
            &[],
            date(2026, 9, 1),
            date(2026, 9, 5),
            2,
        );
        assert!(result.is_listed);
        assert_eq!(result.conflicts.booking_count, 1);
        assert!(!result.conflicts.is_free());
    }

    #[test]
    fn test_canceled_booking_ignored() {
        let r = room(dec!(120), 4, 1);
        let bookings = vec![booking(
            date(2026, 9, 2),
            date(2026, 9, 4),
            BookingStatus::Canceled,
        )];
        let result = resolve(
            &r,
            &bookings,
            &[],
            &[],
            date(2026, 9, 1),
            date(2026, 9, 5),
            2,
        );
        assert_eq!(result.conflicts.booking_count, 0);
        assert!(result.conflicts.is_free());
    }

    #[test]
    fn test_block_out_counted_separately() {
        let r = room(dec!(120), 4, 1);
        let blocks = vec![UnavailableDate {
            id: 1,
            room_id: 1,
            start_date: date(2026, 9, 3),
            end_date: date(2026, 9, 4),
        }];
        let result = resolve(
            &r,
            &[],
            &blocks,
            &[],
            date(2026, 9, 1),
            date(2026, 9, 5),
            2,
        );
        assert_eq!(result.conflicts.booking_count, 0);
        assert_eq!(result.conflicts.block_count, 1);
    }

    // ==================== resolve_price tests ====================

    #[test]
    fn test_base_price_without_rates() {
        assert_eq!(resolve_price(dec!(150), &[], date(2026, 9, 1)), dec!(150));
    }

    #[test]
    fn test_rate_applies_on_closed_interval_bounds() {
        let rates = vec![rate(1, date(2026, 12, 20), date(2026, 12, 31), dec!(300))];
        assert_eq!(
            resolve_price(dec!(150), &rates, date(2026, 12, 20)),
            dec!(300)
        );
        assert_eq!(
            resolve_price(dec!(150), &rates, date(2026, 12, 31)),
            dec!(300)
        );
        assert_eq!(
            resolve_price(dec!(150), &rates, date(2026, 12, 19)),
            dec!(150)
        );
        assert_eq!(
            resolve_price(dec!(150), &rates, date(2027, 1, 1)),
            dec!(150)
        );
    }

    #[test]
    fn test_first_matching_rate_wins() {
        let rates = vec![
            rate(1, date(2026, 12, 20), date(2026, 12, 31), dec!(300)),
            rate(2, date(2026, 12, 25), date(2027, 1, 5), dec!(400)),
        ];
        assert_eq!(
            resolve_price(dec!(150), &rates, date(2026, 12, 26)),
            dec!(300)
        );
    }

    #[test]
    fn test_nightly_price_resolved_at_check_in() {
        let r = room(dec!(150), 4, 2);
        let rates = vec![rate(1, date(2026, 12, 24), date(2026, 12, 26), dec!(280))];
        let result = resolve(
            &r,
            &[],
            &[],
            &rates,
            date(2026, 12, 24),
            date(2026, 12, 28),
            2,
        );
        assert_eq!(result.nightly_price, dec!(280));

        let result = resolve(
            &r,
            &[],
            &[],
            &rates,
            date(2026, 12, 27),
            date(2026, 12, 29),
            2,
        );
        assert_eq!(result.nightly_price, dec!(150));
    }
}
