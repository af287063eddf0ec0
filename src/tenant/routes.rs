//! Tenant route handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::auth::{CurrentUser, MaybeUser};
use crate::error::Result;
use crate::AppState;

use super::requests::{CreatePropertyRequest, OwnedListParams};
use super::responses::{CategoriesResponse, CreatedResponse, OwnedListResponse};
use super::service::{self, OwnedOutcome};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories))
        .route("/tenant/properties", get(list_owned).post(create))
}

/// Global categories for everyone; a signed-in tenant additionally sees
/// their own private ones.
async fn categories(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<Json<CategoriesResponse>> {
    let tenant_id = user.and_then(|u| u.tenant_id());
    let data = service::categories(&state.db, tenant_id).await?;
    Ok(Json(CategoriesResponse { data }))
}

async fn list_owned(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<OwnedListParams>,
) -> Result<Json<OwnedListResponse>> {
    let tenant_id = user.require_tenant()?;
    let page = params.validate()?;

    let response = match service::list_owned(&state.db, tenant_id, page).await? {
        OwnedOutcome::Page(page) => OwnedListResponse::Success {
            data: page.data,
            meta: page.meta,
        },
        OwnedOutcome::Empty => OwnedListResponse::empty(),
    };
    Ok(Json(response))
}

async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let tenant_id = user.require_tenant()?;
    let new = request.validate()?;

    let property = service::create(&state.db, tenant_id, new).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { data: property })))
}
