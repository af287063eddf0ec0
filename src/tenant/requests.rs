//! Request parameters and validation for tenant endpoints.

use serde::Deserialize;

use crate::error::AppError;

fn default_page() -> i64 {
    1
}

/// Query parameters for the owned-properties listing
#[derive(Debug, Deserialize)]
pub struct OwnedListParams {
    #[serde(default = "default_page")]
    pub page: i64,
}

impl OwnedListParams {
    pub fn validate(self) -> Result<i64, AppError> {
        if self.page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }
        Ok(self.page)
    }
}

/// Body of the create-property endpoint
#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    #[serde(default)]
    pub city_id: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i32>,
}

/// Validated property fields ready for insertion
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub city_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl CreatePropertyRequest {
    /// City and category references are only checked for being well-formed
    /// positive identifiers; existence is the store's concern.
    pub fn validate(self) -> Result<NewProperty, AppError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }

        let location = self.location.trim().to_string();
        if location.is_empty() {
            return Err(AppError::Validation(
                "location must not be empty".to_string(),
            ));
        }

        if let Some(city_id) = self.city_id {
            if city_id <= 0 {
                return Err(AppError::Validation(
                    "city_id must be a positive identifier".to_string(),
                ));
            }
        }
        if let Some(category_id) = self.category_id {
            if category_id <= 0 {
                return Err(AppError::Validation(
                    "category_id must be a positive identifier".to_string(),
                ));
            }
        }

        Ok(NewProperty {
            name,
            description: self.description.filter(|d| !d.trim().is_empty()),
            location,
            city_id: self.city_id,
            category_id: self.category_id,
        })
    }
}
