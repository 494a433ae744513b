//! # LankaPOS Server
//!
//! HTTP front for a single-store grocery register: catalog, cart, sales,
//! receipt settings and restock suggestions.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Browser ──► TraceLayer ──► Router ──► extractors ──► handler          │
//! │                                         │               │               │
//! │                              AdminOnly / State     Store / Cart /      │
//! │                                                     RestockAdvisor      │
//! │                                                          │              │
//! │                            Json<T>  or  ApiError ◄───────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod role;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::{AppState, CartState};

/// Builds the complete router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
