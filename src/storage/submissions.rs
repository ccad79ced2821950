// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Form submission intake.
//!
//! Each submission kind maps to one JSON file holding an array of records.
//! Appending loads the current array, pushes a new record carrying a
//! generated id, receipt timestamp and default status, and persists the
//! whole array back. Submissions are unauthenticated and never sealed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{ContentStorage, StorageResult};

/// Status assigned to every new submission.
const NEW_STATUS: &str = "new";

/// The four public form intake channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Contact form on the marketing site
    Contact,
    /// Consultation scheduling requests
    Schedule,
    /// Partner collaboration requests
    Collaboration,
    /// Job applications
    Hiring,
}

impl SubmissionKind {
    /// File stem of the backing JSON file.
    pub fn file_stem(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contact-submissions",
            SubmissionKind::Schedule => "schedule-requests",
            SubmissionKind::Collaboration => "collaboration-requests",
            SubmissionKind::Hiring => "hiring-applications",
        }
    }
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_stem())
    }
}

/// A stored submission record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Generated identifier
    pub id: String,
    /// When the submission was received
    pub received_at: DateTime<Utc>,
    /// Workflow status, `"new"` on intake
    pub status: String,
    /// The caller-supplied form fields
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Repository for append-only form submissions.
pub struct SubmissionRepository<'a> {
    storage: &'a ContentStorage,
}

impl<'a> SubmissionRepository<'a> {
    /// Create a new SubmissionRepository.
    pub fn new(storage: &'a ContentStorage) -> Self {
        Self { storage }
    }

    /// Append a submission to its kind's file, creating the file on first use.
    pub fn append(&self, kind: SubmissionKind, payload: Value) -> StorageResult<SubmissionRecord> {
        let record = SubmissionRecord {
            id: Uuid::new_v4().to_string(),
            received_at: Utc::now(),
            status: NEW_STATUS.to_string(),
            fields: normalize_fields(payload),
        };

        let path = self.storage.paths().submissions(kind.file_stem());
        let mut records: Vec<Value> = if self.storage.exists(&path) {
            self.storage.read_json(&path)?
        } else {
            Vec::new()
        };

        records.push(serde_json::to_value(&record)?);
        self.storage.write_json(&path, &records)?;

        Ok(record)
    }

    /// Count stored submissions of a kind.
    pub fn count(&self, kind: SubmissionKind) -> StorageResult<usize> {
        let path = self.storage.paths().submissions(kind.file_stem());
        if !self.storage.exists(&path) {
            return Ok(0);
        }
        let records: Vec<Value> = self.storage.read_json(&path)?;
        Ok(records.len())
    }
}

/// Flatten an object payload into the record; wrap anything else.
fn normalize_fields(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(mut fields) => {
            // Generated fields always win over caller-supplied ones.
            fields.remove("id");
            fields.remove("received_at");
            fields.remove("status");
            fields
        }
        other => {
            let mut fields = Map::new();
            fields.insert("payload".to_string(), other);
            fields
        }
    }
}
