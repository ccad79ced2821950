// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Shared application state.
//!
//! Authentication state travels as an explicit [`AuthContext`] inside
//! [`AppState`] rather than module-level globals, so handlers and tests
//! always receive the credentials, token service and cipher together.

use crate::auth::{AdminCredentials, TokenService};
use crate::crypto::ContentCipher;
use crate::storage::ContentStorage;

/// Authentication context: the fixed credential pair, the token service
/// bound to the admin identity, and the shared content cipher.
#[derive(Clone)]
pub struct AuthContext {
    pub credentials: AdminCredentials,
    pub tokens: TokenService,
    pub cipher: ContentCipher,
}

impl AuthContext {
    /// Build an auth context from a credential pair and the sealing cipher.
    pub fn new(credentials: AdminCredentials, cipher: ContentCipher) -> Self {
        let tokens = TokenService::new(cipher.clone(), credentials.identity());
        Self {
            credentials,
            tokens,
            cipher,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub storage: ContentStorage,
    pub auth: AuthContext,
}

impl AppState {
    pub fn new(storage: ContentStorage, auth: AuthContext) -> Self {
        Self { storage, auth }
    }
}
