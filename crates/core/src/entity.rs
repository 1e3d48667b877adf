//! Entity trait: identity + continuity across state changes.

use crate::error::{DomainError, DomainResult};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the entity's persisted state.
    ///
    /// Assigned by the store: 1 on insert, +1 per committed update. Used for
    /// optimistic concurrency checks on the patch path.
    fn version(&self) -> u64;
}

/// Optimistic concurrency expectation for a write.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (idempotent writes, migrations, etc.).
    Any,
    /// Require the entity to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::ConcurrentModification)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_matches_every_version() {
        assert!(ExpectedVersion::Any.matches(0));
        assert!(ExpectedVersion::Any.matches(42));
    }

    #[test]
    fn exact_requires_equality() {
        assert!(ExpectedVersion::Exact(3).matches(3));
        assert!(!ExpectedVersion::Exact(3).matches(4));
        assert_eq!(
            ExpectedVersion::Exact(3).check(4),
            Err(DomainError::ConcurrentModification)
        );
    }
}
