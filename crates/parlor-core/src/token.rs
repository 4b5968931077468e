//! Host credential signing.
//!
//! A game's host receives a signed bearer token at creation time and presents
//! it on host-scoped calls. The token carries the host identity in the clear
//! (base64url) alongside a keyed SHA-256 tag, so verification needs no
//! storage lookup. No expiry or refresh is defined.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use crate::error::DomainError;

/// Issues and verifies host credentials with a process-wide secret.
#[derive(Debug, Clone)]
pub struct TokenSigner {
    secret: String,
}

impl TokenSigner {
    /// Creates a signer from the shared secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issues a token asserting `identity`.
    #[must_use]
    pub fn issue(&self, identity: &str) -> String {
        format!("{}.{}", URL_SAFE_NO_PAD.encode(identity), self.tag(identity))
    }

    /// Verifies a token and returns the identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Unauthorized` if the token is malformed or the
    /// signature does not match.
    pub fn verify(&self, token: &str) -> Result<String, DomainError> {
        let (encoded, tag) = token
            .split_once('.')
            .ok_or_else(|| DomainError::Unauthorized("malformed token".into()))?;
        let identity_bytes = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| DomainError::Unauthorized("malformed token".into()))?;
        let identity = String::from_utf8(identity_bytes)
            .map_err(|_| DomainError::Unauthorized("malformed token".into()))?;

        if tag == self.tag(&identity) {
            Ok(identity)
        } else {
            Err(DomainError::Unauthorized("token signature mismatch".into()))
        }
    }

    fn tag(&self, identity: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.secret.as_bytes());
        hasher.update([0u8]);
        hasher.update(identity.as_bytes());
        let digest = hasher.finalize();
        digest.iter().map(|b| format!("{b:02x}")).collect()
    }
}
