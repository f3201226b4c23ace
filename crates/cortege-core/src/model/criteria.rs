use chrono::{DateTime, Utc};
use cortege_core_types::{CemeteryId, CustomerId, ValueObject};

use crate::errors::DomainError;

/// Search criteria for visit listings
///
/// Hydrated from externally supplied query parameters before any
/// repository call, so a use case never sees an unvalidated filter. All
/// components are optional; an all-`None` criteria means "everything".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VisitCriteria {
    customer: Option<CustomerId>,
    cemetery: Option<CemeteryId>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl VisitCriteria {
    /// Construct validated criteria
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` if both bounds are present and `from` is
    /// after `to`.
    pub fn new(
        customer: Option<CustomerId>,
        cemetery: Option<CemeteryId>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(DomainError::InvalidDateRange { from, to });
            }
        }

        Ok(Self {
            customer,
            cemetery,
            from,
            to,
        })
    }

    pub fn customer(&self) -> Option<&CustomerId> {
        self.customer.as_ref()
    }

    pub fn cemetery(&self) -> Option<&CemeteryId> {
        self.cemetery.as_ref()
    }

    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }
}

impl ValueObject for VisitCriteria {}
