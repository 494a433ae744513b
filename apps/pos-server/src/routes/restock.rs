//! # Restock Route
//!
//! Admin-only restock suggestions. Any advisor failure becomes a 502 with
//! the message "Failed to generate restocking suggestions."

use axum::extract::State;
use axum::Json;
use lanka_core::SuggestRestockOutput;
use tracing::debug;

use crate::error::ApiResult;
use crate::role::AdminOnly;
use crate::state::AppState;

/// Returns `{ "restockSuggestions": "<JSON array as a string>" }`.
pub async fn get_restock_suggestions(
    _admin: AdminOnly,
    State(state): State<AppState>,
) -> ApiResult<Json<SuggestRestockOutput>> {
    debug!("get_restock_suggestions");
    Ok(Json(state.advisor.suggestions().await?))
}
