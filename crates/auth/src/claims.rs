use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims carried by catalog API tokens.
///
/// This is the minimal claim set the API expects once a token's signature has
/// been verified by the token layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,

    /// Token identifier, unique per issued token.
    pub jti: String,

    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,

    /// Expiration, seconds since the Unix epoch.
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate token claims.
///
/// Note: this validates the *claims* only. Signature verification is handled
/// by [`crate::token::TokenVerifier`].
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now.timestamp() < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now.timestamp() >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn claims(iat: i64, exp: i64) -> Claims {
        Claims {
            sub: "admin".to_string(),
            jti: "test-token".to_string(),
            iat,
            exp,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn accepts_token_inside_window() {
        assert_eq!(validate_claims(&claims(100, 200), at(150)), Ok(()));
    }

    #[test]
    fn rejects_expired_token() {
        assert_eq!(
            validate_claims(&claims(100, 200), at(200)),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn rejects_token_from_the_future() {
        assert_eq!(
            validate_claims(&claims(100, 200), at(50)),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn rejects_inverted_window() {
        assert_eq!(
            validate_claims(&claims(200, 100), at(150)),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
