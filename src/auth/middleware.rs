// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Access-gate middleware for protected routes.
//!
//! Applied uniformly to the protected route subtree; a request without a
//! valid bearer token is rejected before any handler logic runs. On
//! success the decoded [`super::TokenClaims`] are inserted into request
//! extensions for downstream extractors.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::AuthError;
use crate::state::AppState;

/// Gate middleware: verify the bearer token or reject with 401.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match bearer_token(&request) {
        Ok(token) => token,
        Err(e) => return e.into_response(),
    };

    match state.auth.tokens.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error_code = e.error_code(), "rejected protected request");
            e.into_response()
        }
    }
}

/// Extract the bearer token from the authorization header.
fn bearer_token(request: &Request) -> Result<&str, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;

    let value = header.to_str().map_err(|_| AuthError::InvalidAuthHeader)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidAuthHeader);
    }

    Ok(token)
}
