use chrono::{DateTime, Utc};
use cortege_core_types::{CemeteryId, CustomerId, Entity, VisitId};

use crate::errors::DomainError;

/// Longest accepted note, in characters
pub const NOTE_MAX: usize = 500;

/// Visit - one attended grave visit at a cemetery
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    id: VisitId,
    customer: CustomerId,
    cemetery: CemeteryId,
    visited_at: DateTime<Utc>,
    note: Option<String>,
}

impl Visit {
    /// Construct a validated visit
    ///
    /// # Errors
    ///
    /// Returns `NoteTooLong` if a supplied note exceeds [`NOTE_MAX`]
    /// characters. An empty note is a legitimate note.
    pub fn new(
        id: VisitId,
        customer: CustomerId,
        cemetery: CemeteryId,
        visited_at: DateTime<Utc>,
        note: Option<String>,
    ) -> Result<Self, DomainError> {
        if let Some(note) = &note {
            let len = note.chars().count();
            if len > NOTE_MAX {
                return Err(DomainError::NoteTooLong { len, max: NOTE_MAX });
            }
        }

        Ok(Self {
            id,
            customer,
            cemetery,
            visited_at,
            note,
        })
    }

    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }

    pub fn cemetery(&self) -> &CemeteryId {
        &self.cemetery
    }

    pub fn visited_at(&self) -> DateTime<Utc> {
        self.visited_at
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl Entity for Visit {
    type Id = VisitId;

    fn id(&self) -> &VisitId {
        &self.id
    }
}
