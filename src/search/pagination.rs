//! Result shaping: sorting and fixed-size pagination.

use serde::Serialize;

use crate::error::AppError;

use super::processor::ProcessedProperty;

/// Search results are served in fixed pages of five.
pub const PAGE_SIZE: i64 = 5;

/// Pagination metadata echoed alongside every page
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub per_page: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageMeta {
    pub fn new(current_page: i64, total_items: i64, per_page: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total_items + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            current_page,
            total_pages,
            total_items,
            per_page,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

/// One page of shaped results
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Sort key for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sorts properties in place.
///
/// Price sorting uses each property's minimum eligible room price as the
/// representative value. Callers that pass no sort key skip this entirely,
/// preserving input order.
pub fn sort_properties(properties: &mut [ProcessedProperty], key: SortKey, order: SortOrder) {
    match key {
        SortKey::Name => properties.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => {
            properties.sort_by(|a, b| a.representative_price().cmp(&b.representative_price()))
        }
    }
    if order == SortOrder::Desc {
        properties.reverse();
    }
}

/// Slices a page out of the shaped list.
///
/// Requesting a page beyond the last one is a caller error, not a silent
/// empty page. The zero-item case never reaches the range check: the
/// service layer short-circuits it into the distinct empty-result outcome,
/// and this function returns an empty zero-page for it as well.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: i64) -> Result<Page<T>, AppError> {
    let total_items = items.len() as i64;
    let meta = PageMeta::new(page, total_items, per_page);

    if total_items == 0 {
        return Ok(Page {
            data: Vec::new(),
            meta,
        });
    }

    if page > meta.total_pages {
        return Err(AppError::PageOutOfRange {
            requested: page,
            total_pages: meta.total_pages,
        });
    }

    let offset = ((page - 1) * per_page) as usize;
    let data = items
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    Ok(Page { data, meta })
}
