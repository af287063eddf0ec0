//! Per-day calendar expansion for a room and month.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Booking, BookingStatus, PeakSeasonRate, Room, UnavailableDate};

use super::resolver::overlaps;

/// One day of a room's availability calendar
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Non-canceled bookings touching this day.
    pub booking_count: usize,
    /// True when an owner block-out touches this day.
    pub is_blocked: bool,
    /// Seasonal rate override touching this day, if any.
    #[serde(with = "rust_decimal::serde::str_option")]
    pub rate: Option<Decimal>,
    /// Nightly price for this day (override or base).
    #[serde(with = "rust_decimal::serde::str")]
    pub nightly_price: Decimal,
}

/// Number of days in a month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_first - first).num_days() as u32)
}

/// Expands a room's records into one `CalendarDay` per day of the month,
/// in chronological order.
///
/// Each day is checked with the shared overlap test against the singleton
/// window `[day, day + 1)`. A pure function of its inputs; callers validate
/// year and month upstream, an invalid month yields an empty calendar.
pub fn expand_calendar(
    room: &Room,
    bookings: &[Booking],
    blocks: &[UnavailableDate],
    rates: &[PeakSeasonRate],
    year: i32,
    month: u32,
) -> Vec<CalendarDay> {
    let Some(days) = days_in_month(year, month) else {
        return Vec::new();
    };

    (1..=days)
        .filter_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .map(|day| {
            let next = day + Duration::days(1);

            let booking_count = bookings
                .iter()
                .filter(|b| b.status != BookingStatus::Canceled)
                .filter(|b| overlaps(b.check_in, b.check_out, day, next))
                .count();

            let is_blocked = blocks
                .iter()
                .any(|u| overlaps(u.start_date, u.end_date, day, next));

            let rate = rates
                .iter()
                .find(|r| overlaps(r.start_date, r.end_date, day, next))
                .map(|r| r.price);

            CalendarDay {
                date: day,
                booking_count,
                is_blocked,
                rate,
                nightly_price: rate.unwrap_or(room.price),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room() -> Room {
        Room {
            id: 1,
            property_id: 1,
            name: "Loft".to_string(),
            description: None,
            price: dec!(90),
            max_guests: 2,
            quantity: 1,
            picture: None,
        }
    }

    #[test]
    fn test_non_leap_february_has_28_days() {
        let days = expand_calendar(&room(), &[], &[], &[], 2025, 2);
        assert_eq!(days.len(), 28);
        assert_eq!(days[0].date, date(2025, 2, 1));
        assert_eq!(days[27].date, date(2025, 2, 28));
    }

    #[test]
    fn test_leap_february_has_29_days() {
        let days = expand_calendar(&room(), &[], &[], &[], 2028, 2);
        assert_eq!(days.len(), 29);
    }

    #[test]
    fn test_chronological_order() {
        let days = expand_calendar(&room(), &[], &[], &[], 2026, 7);
        assert_eq!(days.len(), 31);
        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_invalid_month_yields_empty_calendar() {
        assert!(expand_calendar(&room(), &[], &[], &[], 2026, 13).is_empty());
        assert!(expand_calendar(&room(), &[], &[], &[], 2026, 0).is_empty());
    }

    #[test]
    fn test_booking_marks_nights_not_checkout_day() {
        let bookings = vec![Booking {
            id: 1,
            room_id: 1,
            check_in: date(2026, 7, 10),
            check_out: date(2026, 7, 13),
            status: BookingStatus::Confirmed,
        }];
        let days = expand_calendar(&room(), &bookings, &[], &[], 2026, 7);

        assert_eq!(days[8].booking_count, 0); // Jul 9
        assert_eq!(days[9].booking_count, 1); // Jul 10
        assert_eq!(days[11].booking_count, 1); // Jul 12
        assert_eq!(days[12].booking_count, 0); // Jul 13, checkout day
    }

    #[test]
    fn test_canceled_booking_not_counted() {
        let bookings = vec![Booking {
            id: 1,
            room_id: 1,
            check_in: date(2026, 7, 10),
            check_out: date(2026, 7, 13),
            status: BookingStatus::Canceled,
        }];
        let days = expand_calendar(&room(), &bookings, &[], &[], 2026, 7);
        assert!(days.iter().all(|d| d.booking_count == 0));
    }

    #[test]
    fn test_block_out_flag() {
        let blocks = vec![UnavailableDate {
            id: 1,
            room_id: 1,
            start_date: date(2026, 7, 5),
            end_date: date(2026, 7, 7),
        }];
        let days = expand_calendar(&room(), &[], &blocks, &[], 2026, 7);

        assert!(!days[3].is_blocked); // Jul 4
        assert!(days[4].is_blocked); // Jul 5
        assert!(days[5].is_blocked); // Jul 6
        assert!(!days[6].is_blocked); // Jul 7, end day excluded by the half-open test
    }

    #[test]
    fn test_rate_overrides_nightly_price() {
        let rates = vec![PeakSeasonRate {
            id: 1,
            room_id: 1,
            start_date: date(2026, 7, 20),
            end_date: date(2026, 7, 25),
            price: dec!(140),
        }];
        let days = expand_calendar(&room(), &[], &[], &rates, 2026, 7);

        assert_eq!(days[18].rate, None); // Jul 19
        assert_eq!(days[18].nightly_price, dec!(90));
        assert_eq!(days[19].rate, Some(dec!(140))); // Jul 20
        assert_eq!(days[19].nightly_price, dec!(140));
        assert_eq!(days[23].rate, Some(dec!(140))); // Jul 24
        assert_eq!(days[24].rate, None); // Jul 25, end day excluded by the half-open test
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2026, 4), Some(30));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 13), None);
    }
}
