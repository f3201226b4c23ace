use cortege_core_types::ValueObject;

use crate::errors::DomainError;

/// Postal address value object
///
/// Appears on the wire as a nested sub-object of the customer payload.
/// All components are validated at construction; the second address line is
/// genuinely optional and absent lines are `None`, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    line1: String,
    line2: Option<String>,
    city: String,
    postal_code: String,
}

impl Address {
    /// Construct a validated address
    ///
    /// # Errors
    ///
    /// Returns `EmptyAddressLine` if `line1`, `city`, or a supplied `line2`
    /// is blank, and `InvalidPostalCode` if the postal code is not 3 to 10
    /// characters of digits and dashes.
    pub fn new(
        line1: impl Into<String>,
        line2: Option<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let line1 = line1.into();
        let city = city.into();
        let postal_code = postal_code.into();

        if line1.trim().is_empty() {
            return Err(DomainError::EmptyAddressLine { field: "line1" });
        }
        if let Some(line2) = &line2 {
            if line2.trim().is_empty() {
                return Err(DomainError::EmptyAddressLine { field: "line2" });
            }
        }
        if city.trim().is_empty() {
            return Err(DomainError::EmptyAddressLine { field: "city" });
        }

        let plausible_len = (3..=10).contains(&postal_code.len());
        let valid_chars = postal_code
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-');
        let has_digit = postal_code.chars().any(|c| c.is_ascii_digit());
        if !plausible_len || !valid_chars || !has_digit {
            return Err(DomainError::InvalidPostalCode { value: postal_code });
        }

        Ok(Self {
            line1,
            line2,
            city,
            postal_code,
        })
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> Option<&str> {
        self.line2.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}

impl ValueObject for Address {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address() {
        let addr = Address::new("1-2-3 Yanaka", None, "Taito", "110-0001").unwrap();
        assert_eq!(addr.line1(), "1-2-3 Yanaka");
        assert_eq!(addr.line2(), None);
        assert_eq!(addr.city(), "Taito");
        assert_eq!(addr.postal_code(), "110-0001");
    }

    #[test]
    fn test_empty_line1_rejected() {
        let err = Address::new("  ", None, "Taito", "110-0001").unwrap_err();
        assert_eq!(err, DomainError::EmptyAddressLine { field: "line1" });
    }

    #[test]
    fn test_blank_line2_rejected() {
        // An absent line2 is None; an empty string is a violation, not absence
        let err = Address::new("1-2-3", Some("".to_string()), "Taito", "110-0001").unwrap_err();
        assert_eq!(err, DomainError::EmptyAddressLine { field: "line2" });
    }

    #[test]
    fn test_empty_city_rejected() {
        assert!(Address::new("1-2-3", None, "", "110-0001").is_err());
    }

    #[test]
    fn test_postal_code_format() {
        assert!(Address::new("x", None, "y", "1100001").is_ok());
        assert!(Address::new("x", None, "y", "110-0001").is_ok());
        assert!(Address::new("x", None, "y", "11").is_err());
        assert!(Address::new("x", None, "y", "abc-1234").is_err());
        assert!(Address::new("x", None, "y", "---").is_err());
        assert!(Address::new("x", None, "y", "12345678901").is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = Address::new("1-2-3", None, "Taito", "1100001").unwrap();
        let b = Address::new("1-2-3", None, "Taito", "1100001").unwrap();
        assert_eq!(a, b);
    }
}
