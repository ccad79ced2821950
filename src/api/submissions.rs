// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Public form submission endpoints.
//!
//! These are unauthenticated and never sealed: the marketing site posts
//! visitor-supplied form data here and each record is appended to its
//! kind's JSON file.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    state::AppState,
    storage::{SubmissionKind, SubmissionRepository},
};

/// Acknowledgment for an accepted submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionResponse {
    /// Generated record identifier
    pub id: String,
    /// Workflow status, `"new"` on intake
    pub status: String,
    /// When the submission was received
    pub received_at: DateTime<Utc>,
}

async fn submit(
    state: AppState,
    kind: SubmissionKind,
    payload: Value,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    let repo = SubmissionRepository::new(&state.storage);
    let record = repo.append(kind, payload).map_err(|e| {
        tracing::error!(kind = %kind, error = %e, "failed to persist submission");
        ApiError::internal("failed to save submission")
    })?;

    tracing::info!(kind = %kind, id = %record.id, "submission received");
    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            id: record.id,
            status: record.status,
            received_at: record.received_at,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/v1/submissions/contact",
    request_body = Value,
    tag = "Submissions",
    responses((status = 201, description = "Submission stored", body = SubmissionResponse))
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    submit(state, SubmissionKind::Contact, payload).await
}

#[utoipa::path(
    post,
    path = "/v1/submissions/schedule",
    request_body = Value,
    tag = "Submissions",
    responses((status = 201, description = "Submission stored", body = SubmissionResponse))
)]
pub async fn submit_schedule(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    submit(state, SubmissionKind::Schedule, payload).await
}

#[utoipa::path(
    post,
    path = "/v1/submissions/collaboration",
    request_body = Value,
    tag = "Submissions",
    responses((status = 201, description = "Submission stored", body = SubmissionResponse))
)]
pub async fn submit_collaboration(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    submit(state, SubmissionKind::Collaboration, payload).await
}

#[utoipa::path(
    post,
    path = "/v1/submissions/hiring",
    request_body = Value,
    tag = "Submissions",
    responses((status = 201, description = "Submission stored", body = SubmissionResponse))
)]
pub async fn submit_hiring(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SubmissionResponse>), ApiError> {
    submit(state, SubmissionKind::Hiring, payload).await
}
