use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use cortege_core_types::{CustomerId, Entity, ScheduleId, ValueObject};

use crate::errors::{DomainError, SchemaError};
use crate::model::PhoneNumber;

/// Outcome of a consultation appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScheduleResult {
    Contract,
    Considering,
    Declined,
}

impl ScheduleResult {
    /// Wire tokens accepted by the upstream, in declaration order
    pub const WIRE_VALUES: &'static [&'static str] = &["CONTRACT", "CONSIDERING", "DECLINED"];

    /// Decode an upstream token
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariant` for any token outside [`Self::WIRE_VALUES`].
    pub fn from_wire(value: &str) -> Result<Self, SchemaError> {
        match value {
            "CONTRACT" => Ok(ScheduleResult::Contract),
            "CONSIDERING" => Ok(ScheduleResult::Considering),
            "DECLINED" => Ok(ScheduleResult::Declined),
            _ => Err(SchemaError::UnknownVariant {
                value: value.to_string(),
                allowed: Self::WIRE_VALUES,
            }),
        }
    }

    /// Encode to the upstream token
    pub fn as_wire(&self) -> &'static str {
        match self {
            ScheduleResult::Contract => "CONTRACT",
            ScheduleResult::Considering => "CONSIDERING",
            ScheduleResult::Declined => "DECLINED",
        }
    }
}

impl ValueObject for ScheduleResult {}

/// Schedule - a consultation appointment with one or more participants
///
/// Participants are a set: the same customer listed twice is one
/// participant. Two invariants hold for every observable schedule:
///
/// - the participant set is never empty
/// - a `CONTRACT` result implies a contact phone number is present
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    id: ScheduleId,
    customer: CustomerId,
    participants: BTreeSet<CustomerId>,
    scheduled_at: DateTime<Utc>,
    result: Option<ScheduleResult>,
    phone: Option<PhoneNumber>,
}

impl Schedule {
    /// Construct a validated schedule
    ///
    /// # Errors
    ///
    /// Returns `EmptyParticipants` if the participant set is empty and
    /// `ContractRequiresPhone` if `result` is `Contract` without a phone.
    pub fn new(
        id: ScheduleId,
        customer: CustomerId,
        participants: BTreeSet<CustomerId>,
        scheduled_at: DateTime<Utc>,
        result: Option<ScheduleResult>,
        phone: Option<PhoneNumber>,
    ) -> Result<Self, DomainError> {
        if participants.is_empty() {
            return Err(DomainError::EmptyParticipants {
                schedule_id: id.to_string(),
            });
        }
        if result == Some(ScheduleResult::Contract) && phone.is_none() {
            return Err(DomainError::ContractRequiresPhone {
                schedule_id: id.to_string(),
            });
        }

        Ok(Self {
            id,
            customer,
            participants,
            scheduled_at,
            result,
            phone,
        })
    }

    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }

    pub fn participants(&self) -> &BTreeSet<CustomerId> {
        &self.participants
    }

    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    pub fn result(&self) -> Option<ScheduleResult> {
        self.result
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }
}

impl Entity for Schedule {
    type Id = ScheduleId;

    fn id(&self) -> &ScheduleId {
        &self.id
    }
}
