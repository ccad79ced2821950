// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! # Sealing Module
//!
//! Turns JSON-serializable values into self-contained opaque strings and
//! back, under a single passphrase-derived key. Both admin tokens and
//! content resources at rest go through this wrapper.

pub mod cipher;

pub use cipher::{ContentCipher, SealError};
