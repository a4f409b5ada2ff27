//! Token verification
//!
//! Bearer-token handling is behind the `TokenVerifier` trait so services can
//! be tested without minting real tokens. `JwtVerifier` is the production
//! implementation (HS256 with a shared secret).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use medley_core::error::{MedleyError, Result};
use medley_core::types::AccountId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maps a raw token to the account it was issued for
pub trait TokenVerifier: Send + Sync {
    /// Verify the token and return the subject account
    fn verify(&self, token: &str) -> Result<AccountId>;
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
pub fn extract_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    iat: i64,
}

/// HS256 token verifier over a shared secret
pub struct JwtVerifier {
    secret: String,
}

impl JwtVerifier {
    /// Create a verifier with the given signing secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a token for an account, valid for the given duration
    pub fn issue(&self, account_id: &AccountId, valid_for: Duration) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + valid_for).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| MedleyError::upstream(format!("failed to issue token: {e}")))
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<AccountId> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            warn!("token verification failed: {}", e);
            MedleyError::access_denied("invalid token")
        })?;
        Ok(AccountId::new(data.claims.sub))
    }
}
