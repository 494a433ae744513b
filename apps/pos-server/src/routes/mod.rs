//! # Routes Module
//!
//! HTTP handlers grouped by area.
//!
//! ## Route Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /health                               any                       │
//! │                                                                         │
//! │  GET    /api/items?q=                         any    list / search      │
//! │  GET    /api/items/{id}                       any                       │
//! │  POST   /api/items                            admin  add item           │
//! │                                                                         │
//! │  GET    /api/cart                             any                       │
//! │  DELETE /api/cart                             any    clear              │
//! │  POST   /api/cart/items                       any    +1 unit            │
//! │  POST   /api/cart/items/{id}/decrement        any    -1 unit            │
//! │  DELETE /api/cart/items/{id}                  any    remove line        │
//! │  POST   /api/cart/checkout                    any    cart → sale        │
//! │                                                                         │
//! │  POST   /api/sales                            any    process sale       │
//! │  GET    /api/sales                            any    history            │
//! │  GET    /api/sales/{id}                       any                       │
//! │  GET    /api/sales/{id}/receipt               any    text receipt       │
//! │                                                                         │
//! │  GET    /api/settings/receipt                 any                       │
//! │  PATCH  /api/settings/receipt                 admin  partial update     │
//! │  GET    /api/settings/low-stock-threshold     any                       │
//! │                                                                         │
//! │  GET    /api/restock-suggestions              admin  restock advisor    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod health;
pub mod items;
pub mod restock;
pub mod sales;
pub mod settings;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// All `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items).post(items::add_item))
        .route("/items/{id}", get(items::get_item))
        .route("/cart", get(cart::get_cart).delete(cart::clear_cart))
        .route("/cart/items", post(cart::add_to_cart))
        .route("/cart/items/{id}", axum::routing::delete(cart::remove_from_cart))
        .route("/cart/items/{id}/decrement", post(cart::decrement_cart_item))
        .route("/cart/checkout", post(cart::checkout))
        .route("/sales", get(sales::list_sales).post(sales::process_sale))
        .route("/sales/{id}", get(sales::get_sale))
        .route("/sales/{id}/receipt", get(sales::get_receipt))
        .route(
            "/settings/receipt",
            get(settings::get_receipt_settings).patch(settings::update_receipt_settings),
        )
        .route(
            "/settings/low-stock-threshold",
            get(settings::get_low_stock_threshold),
        )
        .route("/restock-suggestions", get(restock::get_restock_suggestions))
}
