// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Path constants and utilities for the content storage layout.

use std::path::{Path, PathBuf};

/// Base directory for all persistent content data.
pub const DATA_ROOT: &str = "/data";

/// Storage path utilities for the content filesystem.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all content data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== Content Resource Paths ==========

    /// Directory containing all named content resources.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join("content")
    }

    /// Path to a named content resource file.
    pub fn resource(&self, name: &str) -> PathBuf {
        self.content_dir().join(format!("{name}.json"))
    }

    // ========== Submission Paths ==========

    /// Directory containing all form submission files.
    pub fn submissions_dir(&self) -> PathBuf {
        self.root.join("submissions")
    }

    /// Path to a submission file by its file stem.
    pub fn submissions(&self, stem: &str) -> PathBuf {
        self.submissions_dir().join(format!("{stem}.json"))
    }
}
