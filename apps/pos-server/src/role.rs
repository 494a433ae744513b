//! # Role Extractors
//!
//! The register sends the operator's role in `x-pos-role`. Requests
//! without the header are treated as a cashier.
//!
//! ```text
//! x-pos-role: admin    ──► CurrentRole(Admin)    AdminOnly ✓
//! x-pos-role: cashier  ──► CurrentRole(Cashier)  AdminOnly ✗ 403
//! (absent)             ──► CurrentRole(Cashier)  AdminOnly ✗ 403
//! x-pos-role: manager  ──► 400
//! ```

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lanka_core::UserRole;
use tracing::warn;

use crate::error::ApiError;

/// Header carrying the operator's role.
pub const ROLE_HEADER: &str = "x-pos-role";

/// The role of whoever sent the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRole(pub UserRole);

impl<S> FromRequestParts<S> for CurrentRole
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ROLE_HEADER) else {
            return Ok(CurrentRole(UserRole::Cashier));
        };

        let value = value
            .to_str()
            .map_err(|_| ApiError::validation("x-pos-role header is not valid text"))?;

        value
            .parse::<UserRole>()
            .map(CurrentRole)
            .map_err(ApiError::validation)
    }
}

/// Rejects the request unless the sender is an admin.
#[derive(Debug, Clone, Copy)]
pub struct AdminOnly;

impl<S> FromRequestParts<S> for AdminOnly
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentRole(role) = CurrentRole::from_request_parts(parts, state).await?;
        if role.is_admin() {
            return Ok(AdminOnly);
        }

        warn!(role = %role, path = %parts.uri.path(), "Admin-only route refused");
        Err(ApiError::forbidden("This action requires the admin role"))
    }
}
