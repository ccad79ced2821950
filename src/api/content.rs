// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Content resource endpoints.
//!
//! Reads are public and return the decrypted (or legacy plaintext) JSON.
//! Writes arrive through the gate middleware with the payload already
//! sealed by the admin panel: the handler unseals it to validate, then
//! re-seals and persists.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    state::AppState,
    storage::{ContentRepository, ResourceName, SealedResource, StorageError},
};

/// Acknowledgment for a persisted resource write.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResponse {
    /// Always `"saved"`
    pub status: String,
    /// The resource that was written
    pub resource: String,
}

fn parse_name(name: &str) -> Result<ResourceName, ApiError> {
    ResourceName::parse(name)
        .map_err(|_| ApiError::bad_request(format!("invalid resource name: {name}")))
}

#[utoipa::path(
    get,
    path = "/v1/content/{name}",
    params(("name" = String, Path, description = "Resource name, e.g. reviews or portfolio")),
    tag = "Content",
    responses(
        (status = 200, description = "Resource contents", body = Value),
        (status = 400, description = "Invalid resource name"),
        (status = 404, description = "No such resource")
    )
)]
pub async fn get_resource(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let name = parse_name(&name)?;
    let repo = ContentRepository::new(&state.storage, &state.auth.cipher);

    match repo.read(&name) {
        Ok(value) => Ok(Json(value)),
        Err(StorageError::NotFound(_)) => {
            Err(ApiError::not_found(format!("resource {name} not found")))
        }
        Err(e) => {
            tracing::error!(resource = %name, error = %e, "failed to load resource");
            Err(ApiError::internal("failed to load content"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/v1/content/{name}",
    params(("name" = String, Path, description = "Resource name to overwrite")),
    request_body = SealedResource,
    tag = "Content",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Resource persisted", body = UpdateResponse),
        (status = 400, description = "Invalid resource name"),
        (status = 401, description = "Missing or invalid token"),
        (status = 422, description = "Payload did not decrypt to valid JSON"),
        (status = 500, description = "Failed to persist")
    )
)]
pub async fn update_resource(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<SealedResource>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let name = parse_name(&name)?;

    // The admin panel seals the payload client-side; unseal to validate
    // before accepting it.
    let Some(payload) = state.auth.cipher.unseal(&body.data) else {
        return Err(ApiError::unprocessable(
            "payload did not decrypt to valid JSON",
        ));
    };

    let repo = ContentRepository::new(&state.storage, &state.auth.cipher);
    if let Err(e) = repo.write_sealed(&name, &payload) {
        tracing::error!(resource = %name, error = %e, "failed to persist resource");
        return Err(ApiError::internal("failed to persist content"));
    }

    tracing::info!(resource = %name, "resource updated");
    Ok(Json(UpdateResponse {
        status: "saved".to_string(),
        resource: name.to_string(),
    }))
}
