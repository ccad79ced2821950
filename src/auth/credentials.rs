// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Admin credential pair and validation.
//!
//! A single fixed `{username, password}` pair is configured at process
//! start and never changes at runtime. Validation is an exact-value match;
//! the comparison runs over SHA-256 digests so it does not short-circuit
//! on the first differing byte of the secrets themselves.

use std::env;

use sha2::{Digest, Sha256};

use crate::config::{
    ADMIN_PASSWORD_ENV, ADMIN_USERNAME_ENV, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME,
};

/// The configured admin identity pair.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl AdminCredentials {
    /// Create a credential pair from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load the credential pair from the environment, falling back to the
    /// built-in defaults when unset.
    pub fn from_env() -> Self {
        let username =
            env::var(ADMIN_USERNAME_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());
        let password =
            env::var(ADMIN_PASSWORD_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        Self { username, password }
    }

    /// The admin identity carried in issued tokens.
    pub fn identity(&self) -> &str {
        &self.username
    }

    /// Check a supplied pair against the configured one.
    pub fn validate(&self, username: &str, password: &str) -> bool {
        // Non-short-circuiting `&` keeps both comparisons in every call.
        digest_eq(username, &self.username) & digest_eq(password, &self.password)
    }
}

/// Compare two strings by their SHA-256 digests.
fn digest_eq(supplied: &str, expected: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(expected.as_bytes())
}
