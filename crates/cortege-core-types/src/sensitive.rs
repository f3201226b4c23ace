//! Sensitive data marker for automatic redaction
//!
//! The `Sensitive<T>` wrapper ensures that personally identifiable data
//! (phone numbers, contact details) is never accidentally logged or
//! displayed. Value objects that carry PII wrap the raw value so their
//! derived `Debug` output stays safe to emit.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// Equality and hashing delegate to the inner value, so a wrapped field
/// still participates in the structural equality of its value object.
///
/// # Example
///
/// ```
/// use cortege_core_types::Sensitive;
///
/// let phone = Sensitive::new("090-1234-5678");
/// println!("{:?}", phone); // Prints: ***REDACTED***
///
/// // Access the actual value when crossing the wire boundary
/// assert_eq!(phone.expose(), &"090-1234-5678");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Use this method only where the raw value is genuinely needed —
    /// in practice, when dehydrating to an outbound payload.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Sensitive<T> {}

impl<T: Hash> Hash for Sensitive<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
