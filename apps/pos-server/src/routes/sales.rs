//! # Sale Routes
//!
//! Sale processing, history and receipts.
//!
//! ## Processing Flow
//! ```text
//! POST /api/sales { cartItems, totalAmount }
//!      │
//!      ├── every line: 1 <= quantityInCart <= 999, 0 < price <= MAX_PRICE_CENTS
//!      │
//!      ▼
//! store.sales().process_sale(...)
//!      │
//!      ▼
//! 201 { transaction, lowStockAlerts: ["X is running low (Stock: 2)!"], ... }
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lanka_core::receipt::render_receipt;
use lanka_core::validation::{validate_price, validate_quantity};
use lanka_core::{CartItem, Money, SaleTransaction};
use lanka_store::SaleOutcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Body of `POST /api/sales`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSaleRequest {
    pub cart_items: Vec<CartItem>,
    /// Precomputed by the register; stored as given.
    pub total_amount: Money,
}

/// A recorded sale and the stock alerts it raised.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSaleResponse {
    pub transaction: SaleTransaction,
    pub low_stock_alerts: Vec<String>,
    /// Sum of line subtotals, for comparison with `transaction.totalAmount`.
    pub computed_total: Money,
    pub total_mismatch: bool,
}

impl From<SaleOutcome> for ProcessSaleResponse {
    fn from(outcome: SaleOutcome) -> Self {
        ProcessSaleResponse {
            low_stock_alerts: outcome.alert_messages(),
            computed_total: outcome.computed_total,
            total_mismatch: outcome.total_mismatch(),
            transaction: outcome.sale,
        }
    }
}

/// Records a sale from explicit cart lines.
pub async fn process_sale(
    State(state): State<AppState>,
    Json(request): Json<ProcessSaleRequest>,
) -> ApiResult<(StatusCode, Json<ProcessSaleResponse>)> {
    debug!(lines = request.cart_items.len(), total = %request.total_amount, "process_sale");

    for line in &request.cart_items {
        validate_quantity(i64::from(line.quantity_in_cart))?;
        validate_price(line.item.price.cents())?;
    }

    let outcome = state
        .store
        .sales()
        .process_sale(&request.cart_items, request.total_amount)?;

    Ok((StatusCode::CREATED, Json(ProcessSaleResponse::from(outcome))))
}

/// Every transaction, oldest first.
pub async fn list_sales(State(state): State<AppState>) -> ApiResult<Json<Vec<SaleTransaction>>> {
    debug!("list_sales");
    Ok(Json(state.store.sales().list()?))
}

pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SaleTransaction>> {
    debug!(sale_id = %id, "get_sale");

    state
        .store
        .sales()
        .get_by_id(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Sale", &id))
}

/// Plain-text receipt, laid out with the settings captured at sale time.
pub async fn get_receipt(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<String> {
    debug!(sale_id = %id, "get_receipt");

    let sale = state.store.sales().require(&id)?;
    Ok(render_receipt(&sale, &state.receipt_layout()))
}
