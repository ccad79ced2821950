// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! # Authentication Module
//!
//! Credential validation and opaque bearer tokens for the content gate.
//!
//! ## Auth Flow
//!
//! 1. Admin panel posts `{username, password}` to `/v1/auth/login`
//! 2. Credentials are compared against the configured admin pair
//! 3. On success a token carrying `{identity, issued_at, expires_at}` is
//!    sealed with the shared passphrase and handed to the client
//! 4. The client sends `Authorization: Bearer <token>` on protected
//!    requests; the gate middleware unseals and verifies it before any
//!    handler logic runs
//!
//! ## Security
//!
//! - Tokens expire 24 hours after issuance; expiry is the only
//!   invalidation (no server-side revocation list)
//! - Credential comparison goes through digest equality rather than
//!   short-circuiting string comparison
//! - A token whose identity does not match the configured admin identity
//!   fails verification even when unexpired

pub mod credentials;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod token;

pub use credentials::AdminCredentials;
pub use error::AuthError;
pub use extractor::AdminToken;
pub use middleware::require_admin;
pub use token::{IssuedToken, TokenClaims, TokenService, TOKEN_TTL_HOURS};
