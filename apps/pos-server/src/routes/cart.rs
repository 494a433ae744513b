//! # Cart Routes
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│   Sale   │                        │
//! │  │  Cart    │     │          │     │ recorded │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart        checkout                           │
//! │       │           decrement          (clears cart)                      │
//! │       │           remove                 │                              │
//! │       │                │                 │                              │
//! │       └── clear_cart ◄─┘◄────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lanka_core::{Cart, CartItem, CartTotals, CoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::routes::sales::ProcessSaleResponse;
use crate::state::AppState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl TryFrom<&Cart> for CartResponse {
    type Error = CoreError;

    fn try_from(cart: &Cart) -> Result<Self, CoreError> {
        Ok(CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::try_from(cart)?,
        })
    }
}

/// Body of `POST /api/cart/items`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub item_id: String,
}

pub async fn get_cart(State(state): State<AppState>) -> ApiResult<Json<CartResponse>> {
    debug!("get_cart");
    let response = state.cart.with_cart(|cart| CartResponse::try_from(cart))?;
    Ok(Json(response))
}

/// Adds one unit of an item, using the catalog's current stock as the cap.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> ApiResult<Json<CartResponse>> {
    debug!(item_id = %request.item_id, "add_to_cart");

    let item = state.store.items().require(&request.item_id)?;
    let response = state.cart.with_cart_mut(|cart| {
        cart.add_item(&item, 1)?;
        CartResponse::try_from(&*cart)
    })?;

    Ok(Json(response))
}

/// Removes one unit; the line disappears when it reaches zero.
pub async fn decrement_cart_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    debug!(item_id = %item_id, "decrement_cart_item");

    let response = state.cart.with_cart_mut(|cart| {
        cart.decrement(&item_id)?;
        CartResponse::try_from(&*cart)
    })?;

    Ok(Json(response))
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<CartResponse>> {
    debug!(item_id = %item_id, "remove_from_cart");

    let response = state.cart.with_cart_mut(|cart| {
        cart.remove_item(&item_id)?;
        CartResponse::try_from(&*cart)
    })?;

    Ok(Json(response))
}

pub async fn clear_cart(State(state): State<AppState>) -> ApiResult<Json<CartResponse>> {
    debug!("clear_cart");
    let response = state.cart.with_cart_mut(|cart| {
        cart.clear();
        CartResponse::try_from(&*cart)
    })?;
    Ok(Json(response))
}

/// Processes the cart as a sale and empties it.
///
/// The cart stays locked while the sale is recorded, so no other request
/// can change it in between. It is left untouched if the sale fails.
pub async fn checkout(State(state): State<AppState>) -> ApiResult<(StatusCode, Json<ProcessSaleResponse>)> {
    debug!("checkout");

    let outcome = state.cart.with_cart_mut(|cart| {
        if cart.is_empty() {
            return Err(ApiError::from(CoreError::EmptyCart));
        }
        let total = cart.total()?;
        let outcome = state.store.sales().process_sale(&cart.items, total)?;
        cart.clear();
        Ok::<_, ApiError>(outcome)
    })?;

    info!(sale_id = %outcome.sale.id, "Checkout complete");
    Ok((StatusCode::CREATED, Json(ProcessSaleResponse::from(outcome))))
}
