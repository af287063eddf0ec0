//! Category and city lookup rows

use serde::Serialize;
use sqlx::FromRow;

/// Property category. A null `tenant_id` marks a global category visible to
/// everyone; otherwise the category is private to the owning tenant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub tenant_id: Option<i32>,
}

/// City lookup row
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub city_type: String,
}
