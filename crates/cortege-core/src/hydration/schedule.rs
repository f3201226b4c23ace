use serde::{Deserialize, Serialize};

use cortege_core_types::{CustomerId, Entity, ScheduleId};

use crate::errors::Result;
use crate::hydration::{
    DateTimeHydrator, EnumHydrator, Hydrator, IdHydrator, OptionalHydrator, PhoneHydrator,
    SchemaHydrator, SetHydrator, WirePayload,
};
use crate::model::{Schedule, ScheduleResult};
use crate::schema::{FieldRule, Schema};

/// Wire shape of a schedule payload
///
/// Participants travel as an array of bare UUID strings; the domain side
/// is a set, so duplicates collapse on the way in. `result` and `phone`
/// are `null` until the consultation concludes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub identifier: String,
    pub customer: String,
    pub participants: Vec<String>,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: String,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl WirePayload for SchedulePayload {
    const ENTITY: &'static str = "schedule";
}

/// Hydrator between [`Schedule`] and [`SchedulePayload`]
///
/// The empty-participants and contract-requires-phone invariants are the
/// constructor's to enforce: a payload can be schema-valid and still fail
/// here, and the constructor error propagates unmodified.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleHydrator;

impl Hydrator for ScheduleHydrator {
    type Domain = Schedule;
    type Payload = SchedulePayload;

    fn hydrate(&self, payload: SchedulePayload) -> Result<Schedule> {
        let id = IdHydrator::<ScheduleId>::new().hydrate(payload.identifier)?;
        let customer = IdHydrator::<CustomerId>::new().hydrate(payload.customer)?;
        let participants =
            SetHydrator::new(IdHydrator::<CustomerId>::new()).hydrate(payload.participants)?;
        let scheduled_at = DateTimeHydrator.hydrate(payload.scheduled_at)?;
        let result = OptionalHydrator::new(EnumHydrator::<ScheduleResult>::new())
            .hydrate(payload.result)?;
        let phone = OptionalHydrator::new(PhoneHydrator).hydrate(payload.phone)?;

        Schedule::new(id, customer, participants, scheduled_at, result, phone)
            .map_err(Into::into)
    }

    fn dehydrate(&self, value: &Schedule) -> SchedulePayload {
        SchedulePayload {
            identifier: value.id().as_str().to_string(),
            customer: value.customer().as_str().to_string(),
            participants: SetHydrator::new(IdHydrator::<CustomerId>::new())
                .dehydrate(value.participants()),
            scheduled_at: DateTimeHydrator.dehydrate(&value.scheduled_at()),
            result: OptionalHydrator::new(EnumHydrator::<ScheduleResult>::new())
                .dehydrate(&value.result()),
            phone: value.phone().map(|phone| PhoneHydrator.dehydrate(phone)),
        }
    }
}

impl SchemaHydrator for ScheduleHydrator {
    fn schema(&self) -> Schema {
        Schema::new(SchedulePayload::ENTITY)
            .field("identifier", FieldRule::Uuid)
            .field("customer", FieldRule::Uuid)
            .field("participants", FieldRule::Array(Box::new(FieldRule::Uuid)))
            .field("scheduledAt", FieldRule::DateTime)
            .optional("result", FieldRule::OneOf(ScheduleResult::WIRE_VALUES))
            .optional("phone", FieldRule::Text { min: 7, max: 20 })
    }
}
