//! `nordwear-auth` — bearer-token boundary for catalog write operations.
//!
//! Claims validation is pure and deterministic; HS256 signing lives behind
//! `TokenIssuer`/`TokenVerifier` so the rest of the workspace stays
//! transport-agnostic. Read operations never touch this crate.

pub mod claims;
pub mod credentials;
pub mod token;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use credentials::verify_credentials;
pub use token::{TokenError, TokenIssuer, TokenVerifier};
