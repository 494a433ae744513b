//! # Item Routes
//!
//! Catalog listing, lookup and (admin) item creation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lanka_core::validation::validate_new_item;
use lanka_core::Item;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::role::AdminOnly;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Matched against name, category and id. Absent or blank lists all.
    pub q: Option<String>,
}

/// Body of `POST /api/items`. Prices are in cents.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub name: String,
    pub price: i64,
    pub stock: i64,
    #[serde(default)]
    pub category: Option<String>,
}

/// Lists the catalog, or searches it when `q` is given.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Item>>> {
    debug!(q = ?params.q, "list_items");

    let items = match params.q.as_deref() {
        Some(query) => state.store.items().search(query)?,
        None => state.store.items().list()?,
    };
    Ok(Json(items))
}

pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Item>> {
    debug!(item_id = %id, "get_item");

    state
        .store
        .items()
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Item", &id))
}

/// Validates and adds a new item. Admin only.
pub async fn add_item(
    _admin: AdminOnly,
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    debug!(name = %request.name, "add_item");

    let new_item = validate_new_item(
        &request.name,
        request.price,
        request.stock,
        request.category.as_deref(),
    )?;
    let item = state.store.items().add(new_item)?;

    Ok((StatusCode::CREATED, Json(item)))
}
