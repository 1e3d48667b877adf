//! URL slug derivation.
//!
//! Slugs are lowercase identifiers composed of ASCII letters, digits, and
//! single interior hyphens. Derivation is deterministic and idempotent:
//! feeding a derived slug back in returns it unchanged.

/// Derive a URL slug from a display name.
///
/// Trims surrounding whitespace, lowercases, folds common Latin diacritics
/// to their base ASCII letter, turns whitespace runs into single hyphens and
/// strips everything else. Returns an empty string for empty or
/// whitespace-only input.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        let ch = fold_diacritic(ch);
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        }
        // every other character is stripped
    }

    out
}

/// Return `true` when `value` already satisfies the slug grammar:
/// non-empty, `[a-z0-9-]` only, no leading/trailing/doubled hyphens.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn fold_diacritic(ch: char) -> char {
    match ch {
        'å' | 'ä' | 'à' | 'á' | 'â' | 'ã' | 'æ' => 'a',
        'ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ø' => 'o',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn derives_simple_names() {
        assert_eq!(slugify("Summer Wear"), "summer-wear");
        assert_eq!(slugify("Svart T-shirt"), "svart-t-shirt");
    }

    #[test]
    fn folds_nordic_diacritics() {
        assert_eq!(slugify("Blå T-shirt"), "bla-t-shirt");
        assert_eq!(slugify("Mörkgrön Tröja"), "morkgron-troja");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("  Summer   Wear  "), "summer-wear");
        assert_eq!(slugify("a\t\nb"), "a-b");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Rock'n'Roll!"), "rocknroll");
        assert_eq!(slugify("Shoes & Socks"), "shoes-socks");
        assert_eq!(slugify("50% Off"), "50-off");
    }

    #[test]
    fn collapses_and_trims_hyphens() {
        assert_eq!(slugify("--a---b--"), "a-b");
        assert_eq!(slugify(" - leading"), "leading");
    }

    #[test]
    fn empty_and_whitespace_only_yield_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn derived_slugs_pass_validation() {
        for name in ["Summer Wear", "Blå T-shirt", "50% Off", "a--b"] {
            assert!(is_valid_slug(&slugify(name)), "slugify({name:?})");
        }
    }

    #[test]
    fn validation_rejects_malformed_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("dou--ble"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("with space"));
    }

    proptest! {
        /// Every derived slug is empty or matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
        #[test]
        fn output_is_empty_or_valid(name in "\\PC{0,80}") {
            let slug = slugify(&name);
            prop_assert!(slug.is_empty() || is_valid_slug(&slug), "slug: {slug:?}");
        }

        /// Derivation is idempotent.
        #[test]
        fn derivation_is_idempotent(name in "\\PC{0,80}") {
            let once = slugify(&name);
            prop_assert_eq!(slugify(&once), once);
        }
    }
}
