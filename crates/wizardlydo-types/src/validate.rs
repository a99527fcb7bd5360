use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length, in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

// Loose RFC-5322 shape: something@domain.tld, no whitespace. Close enough
// to what the signup backend accepts without chasing the full grammar.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("static regex")
});

/// True iff `email` looks like a deliverable address. Whitespace anywhere
/// fails, as does a dotless domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True iff `password` meets the minimum length. Length is the only rule;
/// there is deliberately no complexity requirement.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("UPPER_case%ok@Example.ORG"));
    }

    #[test]
    fn rejects_things_that_are_not_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("user@dotless"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("user@exam ple.com"));
        assert!(!is_valid_email("user@example.com\n"));
    }

    #[test]
    fn password_rule_is_length_and_nothing_else() {
        assert!(!is_valid_password(""));
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password("        ")); // eight spaces pass; length is the only rule

        for s in ["", "a", "short", "exactly8", "comfortably long password"] {
            assert_eq!(is_valid_password(s), s.len() >= MIN_PASSWORD_LEN);
        }
    }
}
