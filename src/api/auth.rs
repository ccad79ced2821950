// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Login and session endpoints.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    auth::{AdminToken, AuthError},
    state::AppState,
};

/// Login request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin username
    pub username: String,
    /// Admin password
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque bearer token for protected requests
    pub token: String,
    /// When the token stops verifying
    pub expires_at: DateTime<Utc>,
}

/// Decoded session information for a presented token.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Identity the token was issued to
    pub identity: String,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
    /// When the token stops verifying
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    if !state
        .auth
        .credentials
        .validate(&request.username, &request.password)
    {
        tracing::warn!(username = %request.username, "rejected login attempt");
        return Err(AuthError::InvalidCredentials);
    }

    let issued = state.auth.tokens.issue(state.auth.credentials.identity())?;
    tracing::info!(identity = %issued.claims.identity, "issued admin token");

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.claims.expires_at,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/auth/session",
    tag = "Auth",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Token is valid", body = SessionResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn session(AdminToken(claims): AdminToken) -> Json<SessionResponse> {
    Json(SessionResponse {
        identity: claims.identity,
        issued_at: claims.issued_at,
        expires_at: claims.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use chrono::Duration;

    #[tokio::test]
    async fn login_with_configured_pair_issues_token() {
        let (state, _dir) = test_state();

        let Json(response) = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "admin@techrover.com".to_string(),
                password: "TechRover@2025!".to_string(),
            }),
        )
        .await
        .expect("login succeeds");

        // The issued token verifies and expires 24 hours out.
        let claims = state.auth.tokens.verify(&response.token).unwrap();
        assert_eq!(claims.identity, "admin@techrover.com");
        assert_eq!(claims.expires_at, response.expires_at);
        assert_eq!(claims.expires_at - claims.issued_at, Duration::hours(24));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let (state, _dir) = test_state();

        let result = login(
            State(state),
            Json(LoginRequest {
                username: "admin@techrover.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn session_echoes_claims() {
        let (state, _dir) = test_state();
        let issued = state
            .auth
            .tokens
            .issue(state.auth.credentials.identity())
            .unwrap();

        let Json(response) = session(AdminToken(issued.claims.clone())).await;
        assert_eq!(response.identity, issued.claims.identity);
        assert_eq!(response.expires_at, issued.claims.expires_at);
    }
}
