//! Request parameters and validation for search endpoints.
//!
//! All validation happens before any store access; mandatory inputs are
//! never defaulted.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

use super::filter::{CategoryFilter, PropertyFilter};
use super::pagination::{SortKey, SortOrder};
use super::processor::StayQuery;

fn default_page() -> i64 {
    1
}

/// Query parameters for the property search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub city_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
}

/// Validated search query
#[derive(Debug)]
pub struct SearchQuery {
    pub city_id: i32,
    pub stay: StayQuery,
    pub filter: PropertyFilter,
    pub sort: Option<(SortKey, SortOrder)>,
    pub page: i64,
}

impl SearchParams {
    pub fn validate(self, today: NaiveDate) -> Result<SearchQuery, AppError> {
        if self.city_id <= 0 {
            return Err(AppError::Validation(
                "city_id must be a positive identifier".to_string(),
            ));
        }
        if self.page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }

        let stay = validate_stay(self.check_in, self.check_out, self.guests, today)?;

        let key = match self.sort_by.as_deref() {
            None => None,
            Some("name") => Some(SortKey::Name),
            Some("price") => Some(SortKey::Price),
            Some(other) => {
                return Err(AppError::Validation(format!("unknown sort key: {other}")));
            }
        };
        let order = match self.order.as_deref() {
            None | Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            Some(other) => {
                return Err(AppError::Validation(format!("unknown sort order: {other}")));
            }
        };

        let filter = PropertyFilter {
            name: self
                .name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            categories: self.category_name.as_deref().and_then(CategoryFilter::parse),
        };

        Ok(SearchQuery {
            city_id: self.city_id,
            stay,
            filter,
            sort: key.map(|k| (k, order)),
            page: self.page,
        })
    }
}

/// Stay window parameters for the property detail endpoint
#[derive(Debug, Deserialize)]
pub struct StayParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

impl StayParams {
    pub fn validate(self, today: NaiveDate) -> Result<StayQuery, AppError> {
        validate_stay(self.check_in, self.check_out, self.guests, today)
    }
}

fn validate_stay(
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i32,
    today: NaiveDate,
) -> Result<StayQuery, AppError> {
    if guests < 1 {
        return Err(AppError::Validation("guests must be at least 1".to_string()));
    }
    if check_in >= check_out {
        return Err(AppError::Validation(
            "check_out must be after check_in".to_string(),
        ));
    }
    if check_in < today {
        return Err(AppError::Validation(
            "check_in must not be in the past".to_string(),
        ));
    }
    Ok(StayQuery {
        check_in,
        check_out,
        guests,
    })
}

/// Year and month parameters for the calendar endpoint
#[derive(Debug, Deserialize)]
pub struct CalendarParams {
    pub year: i32,
    pub month: u32,
}

/// Validated calendar query with the month window precomputed as
/// `[first day, first day of next month)`.
#[derive(Debug, Clone, Copy)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
    pub window: (NaiveDate, NaiveDate),
}

impl CalendarParams {
    pub fn validate(self) -> Result<CalendarQuery, AppError> {
        if !(1..=12).contains(&self.month) {
            return Err(AppError::Validation(
                "month must be between 1 and 12".to_string(),
            ));
        }
        if !(2000..=2100).contains(&self.year) {
            return Err(AppError::Validation("year is out of range".to_string()));
        }

        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match (first, next_first) {
            (Some(first), Some(next_first)) => Ok(CalendarQuery {
                year: self.year,
                month: self.month,
                window: (first, next_first),
            }),
            _ => Err(AppError::Validation("invalid year or month".to_string())),
        }
    }
}
