// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! # Content Storage Module
//!
//! File-resident JSON storage for site content and form submissions.
//! All state lives under the data directory; each read and write is an
//! independent whole-file operation with last-write-wins semantics.
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   content/
//!     {name}.json          # named resource: plaintext JSON or {"data": "<sealed>"}
//!   submissions/
//!     contact-submissions.json
//!     schedule-requests.json
//!     collaboration-requests.json
//!     hiring-applications.json
//! ```
//!
//! ## Sealing
//!
//! Resources written through the protected API path are sealed via
//! [`crate::crypto::ContentCipher`] before they land on disk. Plaintext
//! files remain readable for migration; see [`resources`].

pub mod content_fs;
pub mod paths;
pub mod resources;
pub mod submissions;

pub use content_fs::{ContentStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use resources::{ContentRepository, InvalidResourceName, ResourceName, SealedResource};
pub use submissions::{SubmissionKind, SubmissionRecord, SubmissionRepository};
