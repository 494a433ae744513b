//! # Settings Routes
//!
//! Receipt settings and the low-stock threshold.

use axum::extract::State;
use axum::Json;
use lanka_core::validation::validate_shop_field;
use lanka_core::{ReceiptSettings, ReceiptSettingsUpdate};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::role::AdminOnly;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdResponse {
    pub low_stock_threshold: u32,
}

pub async fn get_receipt_settings(State(state): State<AppState>) -> ApiResult<Json<ReceiptSettings>> {
    debug!("get_receipt_settings");
    Ok(Json(state.store.settings().get()?))
}

/// Merges the given fields into the receipt settings. Admin only.
///
/// Sales already recorded keep the settings they were made with.
pub async fn update_receipt_settings(
    _admin: AdminOnly,
    State(state): State<AppState>,
    Json(update): Json<ReceiptSettingsUpdate>,
) -> ApiResult<Json<ReceiptSettings>> {
    debug!(?update, "update_receipt_settings");

    let shop_fields = [
        ("shopName", &update.shop_name),
        ("shopAddress", &update.shop_address),
        ("shopContact", &update.shop_contact),
    ];
    for (field, value) in shop_fields {
        if let Some(value) = value {
            validate_shop_field(field, value)?;
        }
    }

    let settings = state.store.settings().update(update)?;
    info!("Receipt settings saved");
    Ok(Json(settings))
}

pub async fn get_low_stock_threshold(State(state): State<AppState>) -> ApiResult<Json<ThresholdResponse>> {
    Ok(Json(ThresholdResponse {
        low_stock_threshold: state.store.settings().low_stock_threshold()?,
    }))
}
