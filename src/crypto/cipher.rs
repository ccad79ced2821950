// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Passphrase-based sealing of JSON values.
//!
//! `seal` serializes a value to JSON and encrypts it with ChaCha20-Poly1305
//! under a key derived from the configured passphrase via HKDF-SHA256 with a
//! fresh random salt. The output is `base64(salt || nonce || ciphertext)`,
//! so a sealed string carries everything `unseal` needs besides the
//! passphrase itself.
//!
//! `unseal` is total: wrong key, corrupt input, truncation, a failed
//! authentication tag, or non-JSON plaintext all come back as `None`,
//! never as a panic or an error the caller has to handle.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use hkdf::Hkdf;
use rand::RngCore;
use serde::Serialize;
use serde_json::Value;
use sha2::Sha256;
use thiserror::Error;

/// Salt size prepended to every sealed string (128 bits).
pub const SALT_SIZE: usize = 16;

/// Nonce size for ChaCha20-Poly1305 (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Derived key size (256 bits).
pub const KEY_SIZE: usize = 32;

/// Poly1305 authentication tag size.
const TAG_SIZE: usize = 16;

/// HKDF info string binding derived keys to this application.
const HKDF_INFO: &[u8] = b"techrover-content-sealing-v1";

/// Error type for sealing operations.
///
/// Unsealing deliberately has no error type: failures collapse to `None`.
#[derive(Debug, Error)]
pub enum SealError {
    /// Value could not be serialized to JSON
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// AEAD encryption failed
    #[error("encryption failure")]
    Cipher,
}

/// Symmetric cipher wrapper keyed by a static passphrase.
///
/// Cloning is cheap; every [`crate::state::AppState`] clone shares the same
/// passphrase for the lifetime of the process.
#[derive(Clone)]
pub struct ContentCipher {
    passphrase: String,
}

impl std::fmt::Debug for ContentCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The passphrase never appears in logs.
        f.debug_struct("ContentCipher").finish_non_exhaustive()
    }
}

impl ContentCipher {
    /// Create a cipher from the configured passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Derive the per-seal key from the passphrase and an embedded salt.
    fn derive_key(&self, salt: &[u8]) -> [u8; KEY_SIZE] {
        let hk = Hkdf::<Sha256>::new(Some(salt), self.passphrase.as_bytes());
        let mut key = [0u8; KEY_SIZE];
        hk.expand(HKDF_INFO, &mut key)
            .expect("32 bytes is a valid HKDF-SHA256 output length");
        key
    }

    /// Seal a JSON-serializable value into an opaque string.
    pub fn seal<T: Serialize>(&self, value: &T) -> Result<String, SealError> {
        let plaintext = serde_json::to_vec(value)?;

        let mut salt = [0u8; SALT_SIZE];
        rand::thread_rng().fill_bytes(&mut salt);
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        let key = self.derive_key(&salt);
        let cipher = ChaCha20Poly1305::new_from_slice(&key).map_err(|_| SealError::Cipher)?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_slice())
            .map_err(|_| SealError::Cipher)?;

        let mut raw = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
        raw.extend_from_slice(&salt);
        raw.extend_from_slice(&nonce_bytes);
        raw.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(raw))
    }

    /// Unseal an opaque string back into a JSON value.
    ///
    /// Returns `None` for anything that was not produced by [`seal`] under
    /// the same passphrase.
    pub fn unseal(&self, sealed: &str) -> Option<Value> {
        let raw = STANDARD.decode(sealed.trim()).ok()?;
        if raw.len() < SALT_SIZE + NONCE_SIZE + TAG_SIZE {
            return None;
        }

        let (salt, rest) = raw.split_at(SALT_SIZE);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

        let key = self.derive_key(salt);
        let cipher = ChaCha20Poly1305::new_from_slice(&key).ok()?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .ok()?;

        serde_json::from_slice(&plaintext).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_cipher() -> ContentCipher {
        ContentCipher::new("test-passphrase")
    }

    #[test]
    fn round_trip_preserves_value() {
        let cipher = test_cipher();
        let value = json!({
            "reviews": [
                {"author": "Acme Corp", "rating": 5, "text": "Great work"},
                {"author": "Initech", "rating": 4, "text": null}
            ],
            "meta": {"count": 2, "tags": []}
        });

        let sealed = cipher.seal(&value).unwrap();
        let unsealed = cipher.unseal(&sealed).unwrap();
        assert_eq!(unsealed, value);
    }

    #[test]
    fn round_trip_handles_empty_collections() {
        let cipher = test_cipher();

        for value in [json!([]), json!({}), json!(null), json!(""), json!(0)] {
            let sealed = cipher.seal(&value).unwrap();
            assert_eq!(cipher.unseal(&sealed), Some(value));
        }
    }

    #[test]
    fn unseal_of_garbage_is_none() {
        let cipher = test_cipher();

        assert_eq!(cipher.unseal("garbage"), None);
        assert_eq!(cipher.unseal(""), None);
        assert_eq!(cipher.unseal("not base64 at all!!"), None);
        // Valid base64, too short to contain salt + nonce + tag.
        assert_eq!(cipher.unseal(&STANDARD.encode(b"short")), None);
    }

    #[test]
    fn unseal_with_wrong_passphrase_is_none() {
        let sealed = test_cipher().seal(&json!({"secret": true})).unwrap();
        let other = ContentCipher::new("different-passphrase");
        assert_eq!(other.unseal(&sealed), None);
    }

    #[test]
    fn tampered_ciphertext_is_none() {
        let cipher = test_cipher();
        let sealed = cipher.seal(&json!({"a": 1})).unwrap();

        let mut raw = STANDARD.decode(&sealed).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = STANDARD.encode(raw);

        assert_eq!(cipher.unseal(&tampered), None);
    }

    #[test]
    fn sealing_twice_yields_distinct_strings() {
        let cipher = test_cipher();
        let value = json!({"a": 1});

        let first = cipher.seal(&value).unwrap();
        let second = cipher.seal(&value).unwrap();

        // Fresh salt and nonce per seal.
        assert_ne!(first, second);
        assert_eq!(cipher.unseal(&first), cipher.unseal(&second));
    }

    #[test]
    fn unseal_tolerates_surrounding_whitespace() {
        let cipher = test_cipher();
        let sealed = cipher.seal(&json!(["a"])).unwrap();
        let padded = format!("  {sealed}\n");
        assert_eq!(cipher.unseal(&padded), Some(json!(["a"])));
    }
}
