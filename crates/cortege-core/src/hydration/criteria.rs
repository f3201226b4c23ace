use serde::{Deserialize, Serialize};

use cortege_core_types::{CemeteryId, CustomerId};

use crate::errors::Result;
use crate::hydration::{
    CombinedHydrator, DateTimeHydrator, Hydrator, IdHydrator, OptionalHydrator, SchemaHydrator,
    WirePayload,
};
use crate::model::VisitCriteria;
use crate::schema::{FieldRule, Schema};

/// Wire shape of externally supplied visit search parameters
///
/// This is the untrusted-input path of the hydration framework: query
/// parameters arrive already parsed into this flat shape and must pass
/// the schema and the criteria invariants before a repository sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VisitCriteriaPayload {
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub cemetery: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl WirePayload for VisitCriteriaPayload {
    const ENTITY: &'static str = "visit_criteria";
}

/// Hydrator between [`VisitCriteria`] and [`VisitCriteriaPayload`]
#[derive(Debug, Clone, Copy)]
pub struct VisitCriteriaHydrator;

impl Hydrator for VisitCriteriaHydrator {
    type Domain = VisitCriteria;
    type Payload = VisitCriteriaPayload;

    fn hydrate(&self, payload: VisitCriteriaPayload) -> Result<VisitCriteria> {
        let customer =
            OptionalHydrator::new(IdHydrator::<CustomerId>::new()).hydrate(payload.customer)?;
        let cemetery =
            OptionalHydrator::new(IdHydrator::<CemeteryId>::new()).hydrate(payload.cemetery)?;

        // Both bounds share one transform; the range invariant itself
        // belongs to the constructor
        let bounds = CombinedHydrator::new((
            OptionalHydrator::new(DateTimeHydrator),
            OptionalHydrator::new(DateTimeHydrator),
        ));
        let (from, to) = bounds.hydrate((payload.from, payload.to))?;

        VisitCriteria::new(customer, cemetery, from, to).map_err(Into::into)
    }

    fn dehydrate(&self, value: &VisitCriteria) -> VisitCriteriaPayload {
        let bounds = CombinedHydrator::new((
            OptionalHydrator::new(DateTimeHydrator),
            OptionalHydrator::new(DateTimeHydrator),
        ));
        let (from, to) = bounds.dehydrate(&(value.from(), value.to()));

        VisitCriteriaPayload {
            customer: value.customer().map(|id| id.as_str().to_string()),
            cemetery: value.cemetery().map(|id| id.as_str().to_string()),
            from,
            to,
        }
    }
}

impl SchemaHydrator for VisitCriteriaHydrator {
    fn schema(&self) -> Schema {
        Schema::new(VisitCriteriaPayload::ENTITY)
            .optional("customer", FieldRule::Uuid)
            .optional("cemetery", FieldRule::Uuid)
            .optional("from", FieldRule::DateTime)
            .optional("to", FieldRule::DateTime)
    }
}
