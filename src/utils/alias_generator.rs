//! Random alias generation for shortened URLs.

use rand::Rng;

/// Alphabet for generated aliases. Aliases are case-sensitive, so upper and
/// lower case letters are distinct.
const ALIAS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Aliases that collide with system routes and cannot be chosen by callers.
pub const RESERVED_ALIASES: &[&str] = &["api", "health"];

/// Generates a random case-sensitive alphanumeric alias.
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    (0..ALIAS_LENGTH)
        .map(|_| ALIAS_ALPHABET[rng.random_range(0..ALIAS_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `alias` is reserved for a system endpoint.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_alias_has_correct_length() {
        let alias = generate_alias();
        assert_eq!(alias.len(), ALIAS_LENGTH);
    }

    #[test]
    fn test_generate_alias_is_alphanumeric() {
        for _ in 0..100 {
            let alias = generate_alias();
            assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_alias_produces_distinct_values() {
        let mut aliases = HashSet::new();

        for _ in 0..1000 {
            aliases.insert(generate_alias());
        }

        assert_eq!(aliases.len(), 1000);
    }

    #[test]
    fn test_reserved_aliases_are_detected() {
        for &reserved in RESERVED_ALIASES {
            assert!(is_reserved_alias(reserved));
        }

        assert!(!is_reserved_alias("ex1"));
    }
}
