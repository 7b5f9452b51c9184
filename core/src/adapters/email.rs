use crate::ports::Validator;

/// Shallow email check: an `@` somewhere and more than five characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn is_valid(&self, input: &str) -> bool {
        input.contains('@') && input.len() > 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(EmailValidator.is_valid("example@gmail.com"));
        assert!(EmailValidator.is_valid("ab@c.d"));
    }

    #[test]
    fn test_rejects_without_at() {
        assert!(!EmailValidator.is_valid("example.gmail.com"));
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(!EmailValidator.is_valid("a@b.c"));
        assert!(!EmailValidator.is_valid(""));
    }
}
