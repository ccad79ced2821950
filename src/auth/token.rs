// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Opaque token issuance and verification.
//!
//! A token is a sealed `{identity, issued_at, expires_at}` payload. The
//! lifecycle is: issued on successful login, valid while the current time
//! is strictly before `expires_at`, expired afterwards. There is no
//! revoked state; a client "logs out" by discarding its copy, and a
//! leaked token stays valid until expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::crypto::ContentCipher;

/// Token lifetime in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried inside a sealed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Identity the token was issued to
    pub identity: String,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
    /// When the token stops verifying
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued token together with its decoded claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The opaque bearer string handed to the client
    pub token: String,
    /// The claims sealed inside it
    pub claims: TokenClaims,
}

/// Issues and verifies sealed admin tokens.
#[derive(Clone)]
pub struct TokenService {
    cipher: ContentCipher,
    identity: String,
}

impl TokenService {
    /// Create a token service bound to the expected admin identity.
    pub fn new(cipher: ContentCipher, identity: impl Into<String>) -> Self {
        Self {
            cipher,
            identity: identity.into(),
        }
    }

    /// Issue a token for `identity`, expiring [`TOKEN_TTL_HOURS`] from now.
    pub fn issue(&self, identity: &str) -> Result<IssuedToken, AuthError> {
        let issued_at = Utc::now();
        let claims = TokenClaims {
            identity: identity.to_string(),
            issued_at,
            expires_at: issued_at + Duration::hours(TOKEN_TTL_HOURS),
        };
        let token = self
            .cipher
            .seal(&claims)
            .map_err(|e| AuthError::InternalError(format!("token sealing failed: {e}")))?;
        Ok(IssuedToken { token, claims })
    }

    /// Verify a presented token against the current time.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a presented token against an explicit clock.
    ///
    /// Verification requires both that the sealed identity equals the
    /// configured admin identity and that `now` is strictly before the
    /// sealed expiry.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
        let value = self.cipher.unseal(token).ok_or(AuthError::MalformedToken)?;
        let claims: TokenClaims =
            serde_json::from_value(value).map_err(|_| AuthError::MalformedToken)?;

        if claims.identity != self.identity {
            return Err(AuthError::WrongIdentity);
        }
        if now >= claims.expires_at {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: &str = "admin@techrover.com";

    fn test_service() -> TokenService {
        TokenService::new(ContentCipher::new("test-passphrase"), ADMIN)
    }

    #[test]
    fn issued_token_verifies() {
        let service = test_service();
        let issued = service.issue(ADMIN).unwrap();

        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims, issued.claims);
        assert_eq!(
            claims.expires_at - claims.issued_at,
            Duration::hours(TOKEN_TTL_HOURS)
        );
    }

    #[test]
    fn token_is_valid_until_exactly_expiry() {
        let service = test_service();
        let issued = service.issue(ADMIN).unwrap();
        let expires_at = issued.claims.expires_at;

        // Valid over [issued_at, expires_at).
        assert!(service.verify_at(&issued.token, issued.claims.issued_at).is_ok());
        assert!(service
            .verify_at(&issued.token, expires_at - Duration::seconds(1))
            .is_ok());

        // Invalid at and after expiry.
        let at_expiry = service.verify_at(&issued.token, expires_at);
        assert!(matches!(at_expiry, Err(AuthError::TokenExpired)));
        let past_expiry = service.verify_at(&issued.token, expires_at + Duration::seconds(1));
        assert!(matches!(past_expiry, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn garbage_token_is_malformed() {
        let service = test_service();
        assert!(matches!(
            service.verify("garbage"),
            Err(AuthError::MalformedToken)
        ));
        assert!(matches!(service.verify(""), Err(AuthError::MalformedToken)));
    }

    #[test]
    fn sealed_non_claims_payload_is_malformed() {
        let service = test_service();
        let cipher = ContentCipher::new("test-passphrase");
        let token = cipher.seal(&serde_json::json!({"not": "claims"})).unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn wrong_identity_fails_even_when_unexpired() {
        let service = test_service();
        // Well-formed, unexpired claims for a different identity, sealed
        // under the same passphrase.
        let issued_at = Utc::now();
        let claims = TokenClaims {
            identity: "intruder@techrover.com".to_string(),
            issued_at,
            expires_at: issued_at + Duration::hours(TOKEN_TTL_HOURS),
        };
        let token = ContentCipher::new("test-passphrase").seal(&claims).unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::WrongIdentity)
        ));
    }

    #[test]
    fn token_from_another_passphrase_is_malformed() {
        let service = test_service();
        let foreign = TokenService::new(ContentCipher::new("other-passphrase"), ADMIN);
        let issued = foreign.issue(ADMIN).unwrap();

        assert!(matches!(
            service.verify(&issued.token),
            Err(AuthError::MalformedToken)
        ));
    }
}
