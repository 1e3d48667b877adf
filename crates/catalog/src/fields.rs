//! Field-level constraints shared by products and categories.
//!
//! Limits mirror the storage schema; validation re-runs after every patch
//! merge so a failed edit never produces a partially-valid snapshot.

use rust_decimal::Decimal;

use nordwear_core::{DomainError, DomainResult};

pub const NAME_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;
pub const IMAGE_URL_MAX: usize = 255;
pub const SLUG_MAX: usize = 100;

pub(crate) fn check_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name", "must not be empty"));
    }
    check_len("name", name, NAME_MAX)
}

pub(crate) fn check_price(price: Decimal) -> DomainResult<()> {
    if price < Decimal::ZERO {
        return Err(DomainError::validation("price", "negative"));
    }
    Ok(())
}

pub(crate) fn check_len(field: &'static str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::validation(
            field,
            format!("longer than {max} characters"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_be_non_empty() {
        assert!(check_name("Jeans").is_ok());
        assert!(matches!(
            check_name("   "),
            Err(DomainError::Validation { field: "name", .. })
        ));
    }

    #[test]
    fn price_must_not_be_negative() {
        assert!(check_price(Decimal::ZERO).is_ok());
        assert!(check_price(Decimal::new(19900, 2)).is_ok());
        let err = check_price(Decimal::new(-5, 0)).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("price", "negative")
        );
    }

    #[test]
    fn lengths_are_bounded() {
        assert!(check_len("name", &"a".repeat(NAME_MAX), NAME_MAX).is_ok());
        assert!(check_len("name", &"a".repeat(NAME_MAX + 1), NAME_MAX).is_err());
    }
}
