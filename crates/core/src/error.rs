//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Kind of catalog entity, used for lookups and error payloads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Category,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Category => "category",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing entities, write conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed validation.
    #[error("validation failed: {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A requested entity (or a required association endpoint) was not found.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: Uuid },

    /// A patch raced with another write to the same entity.
    #[error("concurrent modification")]
    ConcurrentModification,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Authorization failure at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: Uuid) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
