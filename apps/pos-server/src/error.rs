//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in LankaPOS                               │
//! │                                                                         │
//! │  Handler                                                               │
//! │  Result<T, ApiError>                                                   │
//! │         │                                                               │
//! │         ├── CoreError      (cart rule, validation)  ──┐                │
//! │         ├── StoreError     (lookup, empty sale)     ──┼──► ApiError    │
//! │         └── AdvisorError   (model call)             ──┘       │        │
//! │                                                               ▼        │
//! │                                         HTTP status + JSON body        │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Item not found: ITM042" }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lanka_advisor::{AdvisorError, RESTOCK_FAILURE_MESSAGE};
use lanka_core::{CoreError, ValidationError};
use lanka_store::StoreError;
use serde::Serialize;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by every failing request.
///
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Coca-Cola 1.5L is currently out of stock."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Role not allowed to use this operation (403)
    Forbidden,

    /// Not enough stock for the requested cart change (409)
    InsufficientStock,

    /// Cart operation failed (409)
    CartError,

    /// Restock advisor failed (502)
    AdvisorError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::InsufficientStock | ErrorCode::CartError => StatusCode::CONFLICT,
            ErrorCode::AdvisorError => StatusCode::BAD_GATEWAY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotInCart(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::OutOfStock { .. } | CoreError::StockLimitReached { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            CoreError::EmptyCart | CoreError::AmountOverflow => ApiError::validation(err.to_string()),
            CoreError::CartTooLarge { .. } => ApiError::new(ErrorCode::CartError, err.to_string()),
            CoreError::Serialization(e) => {
                tracing::error!("Serialization failed: {}", e);
                ApiError::internal("Failed to serialize data")
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            StoreError::EmptySale => ApiError::validation(err.to_string()),
            StoreError::LockPoisoned => {
                tracing::error!("Store lock poisoned");
                ApiError::internal("Store unavailable")
            }
            StoreError::Core(e) => ApiError::from(e),
        }
    }
}

/// Every advisor failure reaches the user as the same message.
impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        tracing::error!(error = %err, "Restock suggestions failed");
        ApiError::new(ErrorCode::AdvisorError, RESTOCK_FAILURE_MESSAGE)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Item", "ITM042");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Item not found: ITM042");
    }

    #[test]
    fn test_stock_errors_conflict() {
        let err = ApiError::from(CoreError::OutOfStock {
            name: "Coca-Cola 1.5L".to_string(),
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.code.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_advisor_detail_is_hidden() {
        let err = ApiError::from(AdvisorError::Status {
            status: 401,
            body: "bad key sk-123".to_string(),
        });
        assert_eq!(err.message, "Failed to generate restocking suggestions.");
        assert!(!err.message.contains("sk-123"));
        assert_eq!(err.code.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_amount_overflow_is_bad_request() {
        let err = ApiError::from(StoreError::Core(CoreError::AmountOverflow));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_errors() {
        let err = ApiError::from(StoreError::not_found("Sale", "SALE0099"));
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = ApiError::from(StoreError::EmptySale);
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
