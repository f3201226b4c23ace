use serde::{Deserialize, Serialize};

use cortege_core_types::{CemeteryId, CustomerId, Entity, VisitId};

use crate::errors::Result;
use crate::hydration::{
    DateTimeHydrator, Hydrator, IdHydrator, OptionalHydrator, PrimitiveHydrator, SchemaHydrator,
    WirePayload,
};
use crate::model::visit::NOTE_MAX;
use crate::model::Visit;
use crate::schema::{FieldRule, Schema};

/// Wire shape of a visit payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitPayload {
    pub identifier: String,
    pub customer: String,
    pub cemetery: String,
    #[serde(rename = "visitedAt")]
    pub visited_at: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl WirePayload for VisitPayload {
    const ENTITY: &'static str = "visit";
}

/// Hydrator between [`Visit`] and [`VisitPayload`]
#[derive(Debug, Clone, Copy)]
pub struct VisitHydrator;

impl Hydrator for VisitHydrator {
    type Domain = Visit;
    type Payload = VisitPayload;

    fn hydrate(&self, payload: VisitPayload) -> Result<Visit> {
        let id = IdHydrator::<VisitId>::new().hydrate(payload.identifier)?;
        let customer = IdHydrator::<CustomerId>::new().hydrate(payload.customer)?;
        let cemetery = IdHydrator::<CemeteryId>::new().hydrate(payload.cemetery)?;
        let visited_at = DateTimeHydrator.hydrate(payload.visited_at)?;
        let note =
            OptionalHydrator::new(PrimitiveHydrator::<String>::new()).hydrate(payload.note)?;

        Visit::new(id, customer, cemetery, visited_at, note).map_err(Into::into)
    }

    fn dehydrate(&self, value: &Visit) -> VisitPayload {
        VisitPayload {
            identifier: value.id().as_str().to_string(),
            customer: value.customer().as_str().to_string(),
            cemetery: value.cemetery().as_str().to_string(),
            visited_at: DateTimeHydrator.dehydrate(&value.visited_at()),
            note: value.note().map(str::to_string),
        }
    }
}

impl SchemaHydrator for VisitHydrator {
    fn schema(&self) -> Schema {
        Schema::new(VisitPayload::ENTITY)
            .field("identifier", FieldRule::Uuid)
            .field("customer", FieldRule::Uuid)
            .field("cemetery", FieldRule::Uuid)
            .field("visitedAt", FieldRule::DateTime)
            .optional("note", FieldRule::Text { min: 0, max: NOTE_MAX })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> VisitPayload {
        VisitPayload {
            identifier: "5a6b7c8d-9e0f-4a1b-8c2d-3e4f5a6b7c8d".to_string(),
            customer: "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4".to_string(),
            cemetery: "3d1c2b4a-5e6f-4a8b-9c0d-1e2f3a4b5c6d".to_string(),
            visited_at: "2024-08-13T14:00:00Z".to_string(),
            note: Some("Flowers replaced.".to_string()),
        }
    }

    #[test]
    fn test_round_trip() {
        let visit = VisitHydrator.hydrate(payload()).unwrap();
        assert_eq!(VisitHydrator.dehydrate(&visit), payload());
    }

    #[test]
    fn test_empty_note_passes_through_inner_hydrator() {
        // "" is present, not absent; it must survive both directions
        let mut p = payload();
        p.note = Some(String::new());

        let visit = VisitHydrator.hydrate(p).unwrap();
        assert_eq!(visit.note(), Some(""));
        assert_eq!(VisitHydrator.dehydrate(&visit).note, Some(String::new()));
    }

    #[test]
    fn test_as_payload_rejects_overlong_note() {
        let raw = json!({
            "identifier": "5a6b7c8d-9e0f-4a1b-8c2d-3e4f5a6b7c8d",
            "customer": "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4",
            "cemetery": "3d1c2b4a-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
            "visitedAt": "2024-08-13T14:00:00Z",
            "note": "x".repeat(NOTE_MAX + 1),
        });

        assert!(VisitHydrator.as_payload(raw).is_err());
    }
}
