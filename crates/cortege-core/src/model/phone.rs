use cortege_core_types::{Sensitive, ValueObject};

use crate::errors::DomainError;

const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Phone number value object
///
/// The raw number is PII, so it lives inside [`Sensitive`] and redacts
/// itself from Debug output. Validation is deliberately loose — digits with
/// optional dashes, spaces, and a leading `+` — because the upstream stores
/// numbers from several national formats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(Sensitive<String>);

impl PhoneNumber {
    /// Construct a validated phone number
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhoneNumber` on unexpected characters, a misplaced
    /// `+`, or a digit count outside 10..=15. Error messages never carry
    /// the raw value.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        for (i, c) in raw.chars().enumerate() {
            let ok = c.is_ascii_digit() || c == '-' || c == ' ' || (c == '+' && i == 0);
            if !ok {
                return Err(DomainError::InvalidPhoneNumber {
                    reason: "unexpected character",
                });
            }
        }

        let digits = raw.chars().filter(char::is_ascii_digit).count();
        if digits < MIN_DIGITS {
            return Err(DomainError::InvalidPhoneNumber {
                reason: "too few digits",
            });
        }
        if digits > MAX_DIGITS {
            return Err(DomainError::InvalidPhoneNumber {
                reason: "too many digits",
            });
        }

        Ok(Self(Sensitive::new(raw)))
    }

    /// Expose the raw number for the wire boundary
    pub fn as_str(&self) -> &str {
        self.0.expose()
    }
}

impl ValueObject for PhoneNumber {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(PhoneNumber::new("090-1234-5678").is_ok());
        assert!(PhoneNumber::new("+81 90 1234 5678").is_ok());
        assert!(PhoneNumber::new("0312345678").is_ok());
    }

    #[test]
    fn test_too_few_digits() {
        let err = PhoneNumber::new("123-456").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPhoneNumber {
                reason: "too few digits"
            }
        );
    }

    #[test]
    fn test_unexpected_character() {
        assert!(PhoneNumber::new("090x1234x5678").is_err());
    }

    #[test]
    fn test_plus_only_allowed_leading() {
        assert!(PhoneNumber::new("+819012345678").is_ok());
        assert!(PhoneNumber::new("81+9012345678").is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let phone = PhoneNumber::new("090-1234-5678").unwrap();
        let debug_str = format!("{:?}", phone);
        assert!(!debug_str.contains("1234"));
        assert!(debug_str.contains("***REDACTED***"));
    }

    #[test]
    fn test_equality_on_raw_value() {
        let a = PhoneNumber::new("090-1234-5678").unwrap();
        let b = PhoneNumber::new("090-1234-5678").unwrap();
        let c = PhoneNumber::new("090-1234-5679").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
