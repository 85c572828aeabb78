use std::sync::LazyLock;

use regex::Regex;
use signet_core::EmailValidator;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Syntax-only email check. The input is not trimmed or lowercased.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEmailValidator;

impl RegexEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_email() {
        assert!(RegexEmailValidator::new().is_valid("valid_email@email.com"));
    }

    #[test]
    fn test_rejects_invalid_emails() {
        let validator = RegexEmailValidator::new();
        for email in [
            "invalid_email",
            "invalid_email@",
            "@email.com",
            "invalid email@email.com",
            "invalid_email@email",
            "",
        ] {
            assert!(!validator.is_valid(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_does_not_normalize() {
        assert!(!RegexEmailValidator::new().is_valid(" valid_email@email.com "));
    }
}
