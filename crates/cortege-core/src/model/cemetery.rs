use chrono::{DateTime, Utc};
use cortege_core_types::{CemeteryId, CustomerId, Entity, ValueObject};

use crate::errors::{DomainError, SchemaError};

/// Longest accepted plot name, in characters
pub const NAME_MAX: usize = 100;

/// Kind of cemetery plot, as enumerated by the upstream service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CemeteryKind {
    Family,
    Individual,
    Community,
}

impl CemeteryKind {
    /// Wire tokens accepted by the upstream, in declaration order
    pub const WIRE_VALUES: &'static [&'static str] = &["FAMILY", "INDIVIDUAL", "COMMUNITY"];

    /// Decode an upstream token
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariant` for any token outside [`Self::WIRE_VALUES`].
    pub fn from_wire(value: &str) -> Result<Self, SchemaError> {
        match value {
            "FAMILY" => Ok(CemeteryKind::Family),
            "INDIVIDUAL" => Ok(CemeteryKind::Individual),
            "COMMUNITY" => Ok(CemeteryKind::Community),
            _ => Err(SchemaError::UnknownVariant {
                value: value.to_string(),
                allowed: Self::WIRE_VALUES,
            }),
        }
    }

    /// Encode to the upstream token
    pub fn as_wire(&self) -> &'static str {
        match self {
            CemeteryKind::Family => "FAMILY",
            CemeteryKind::Individual => "INDIVIDUAL",
            CemeteryKind::Community => "COMMUNITY",
        }
    }
}

impl ValueObject for CemeteryKind {}

/// Cemetery - a plot managed on behalf of a customer
///
/// The construction date is date-only on the wire; in the domain it is the
/// midnight-UTC instant of that date. `in_house` marks plots inside the
/// business's own grounds as opposed to municipal ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Cemetery {
    id: CemeteryId,
    customer: CustomerId,
    name: String,
    kind: CemeteryKind,
    construction: DateTime<Utc>,
    in_house: bool,
}

impl Cemetery {
    /// Construct a validated cemetery
    ///
    /// # Errors
    ///
    /// Returns `EmptyName`/`NameTooLong` for name violations.
    pub fn new(
        id: CemeteryId,
        customer: CustomerId,
        name: impl Into<String>,
        kind: CemeteryKind,
        construction: DateTime<Utc>,
        in_house: bool,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName { entity: "cemetery" });
        }
        let len = name.chars().count();
        if len > NAME_MAX {
            return Err(DomainError::NameTooLong {
                entity: "cemetery",
                len,
                max: NAME_MAX,
            });
        }

        Ok(Self {
            id,
            customer,
            name,
            kind,
            construction,
            in_house,
        })
    }

    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CemeteryKind {
        self.kind
    }

    pub fn construction(&self) -> DateTime<Utc> {
        self.construction
    }

    pub fn in_house(&self) -> bool {
        self.in_house
    }
}

impl Entity for Cemetery {
    type Id = CemeteryId;

    fn id(&self) -> &CemeteryId {
        &self.id
    }
}
