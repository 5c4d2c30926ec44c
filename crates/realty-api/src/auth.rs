// ============================================================================
// Realty API - Authenticated Actor
// File: crates/realty-api/src/auth.rs
// ============================================================================
//! Bearer token extractor resolving the calling user's id.

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthenticated("missing Authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthenticated("expected a Bearer token".to_string()))?;

        let id = state
            .jwt
            .authenticate(token.trim())
            .map_err(|e| ApiError::Unauthenticated(e.to_string()))?;

        Ok(AuthUser { id })
    }
}
