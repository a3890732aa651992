//! Utility functions for BakeOps
//!
//! Common helper functions used across the codebase.

use std::sync::LazyLock;

use chrono::Utc;

/// Regex pattern for validating identifiers (resource ids, session ids)
static VALID_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new("^[a-zA-Z0-9_.:-]+$").expect("Invalid regex pattern"));

/// Validate an identifier contains only allowed characters and is non-empty
///
/// Allowed characters: alphanumeric, underscore, dot, colon, hyphen
///
/// # Examples
///
/// ```
/// use bakeops_common::is_valid_identifier;
///
/// assert!(is_valid_identifier("ord-2024-0113"));
/// assert!(is_valid_identifier("session:tab_1"));
/// assert!(!is_valid_identifier("with spaces"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(str: &str) -> bool {
    VALID_PATTERN.is_match(str)
}

/// Current wall-clock time as epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("ORD-001"));
        assert!(is_valid_identifier("a.b:c_d-e"));
        assert!(!is_valid_identifier("a/b"));
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_now_millis_monotonic_enough() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
        // Sanity check: after 2020-01-01 in millis
        assert!(a > 1_577_836_800_000);
    }
}
