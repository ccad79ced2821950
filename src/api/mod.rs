// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{auth::require_admin, state::AppState, storage::SealedResource};

pub mod auth;
pub mod content;
pub mod health;
pub mod submissions;

pub fn router(state: AppState) -> Router {
    // Gate layer for protected routes: rejects before handler logic runs
    // unless a valid bearer token is presented.
    let gate = axum::middleware::from_fn_with_state(state.clone(), require_admin);

    let v1 = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/session", get(auth::session).route_layer(gate.clone()))
        .route("/content/{name}", get(content::get_resource))
        .route(
            "/content/{name}",
            put(content::update_resource).route_layer(gate),
        )
        .route("/submissions/contact", post(submissions::submit_contact))
        .route("/submissions/schedule", post(submissions::submit_schedule))
        .route(
            "/submissions/collaboration",
            post(submissions::submit_collaboration),
        )
        .route("/submissions/hiring", post(submissions::submit_hiring))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state)
        .nest("/v1", v1)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CorsLayer::permissive())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::session,
        content::get_resource,
        content::update_resource,
        submissions::submit_contact,
        submissions::submit_schedule,
        submissions::submit_collaboration,
        submissions::submit_hiring,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SessionResponse,
            content::UpdateResponse,
            submissions::SubmissionResponse,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse,
            SealedResource
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Admin login and session inspection"),
        (name = "Content", description = "Named content resources"),
        (name = "Submissions", description = "Public form intake"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
