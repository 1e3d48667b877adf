//! HS256 bearer token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use uuid::Uuid;

use crate::claims::{Claims, TokenValidationError, validate_claims};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to encode token: {0}")]
    Encode(String),

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Issues HS256 bearer tokens for authenticated callers.
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            key: EncodingKey::from_secret(secret),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Issue a token for `subject`, valid from now for the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            jti: Uuid::now_v7().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }
}

/// Verifies HS256 bearer tokens on the write path.
pub struct TokenVerifier {
    key: DecodingKey,
}

impl TokenVerifier {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
        }
    }

    /// Decode a bearer token, verify its signature, and validate its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // The time window is checked by `validate_claims` so the policy stays
        // in one deterministic, unit-testable place.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        validate_claims(&data.claims, Utc::now())?;
        Ok(data.claims)
    }
}
