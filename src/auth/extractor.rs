// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Axum extractor for verified admin tokens.
//!
//! Use the `AdminToken` extractor in handlers that need the decoded
//! claims of the presented token:
//!
//! ```rust,ignore
//! async fn my_handler(AdminToken(claims): AdminToken) -> impl IntoResponse {
//!     // claims.identity, claims.expires_at
//! }
//! ```
//!
//! When the route already sits behind [`super::require_admin`], the
//! extractor reuses the claims the middleware stored in request
//! extensions; otherwise it performs the header extraction and
//! verification itself.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{AuthError, TokenClaims};
use crate::state::AppState;

/// Extractor carrying the verified claims of the presented admin token.
pub struct AdminToken(pub TokenClaims);

impl FromRequestParts<AppState> for AdminToken {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The gate middleware stores verified claims in extensions.
        if let Some(claims) = parts.extensions.get::<TokenClaims>().cloned() {
            return Ok(AdminToken(claims));
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?
            .trim();

        let claims = state.auth.tokens.verify(token)?;
        Ok(AdminToken(claims))
    }
}
