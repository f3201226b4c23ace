use serde::{Deserialize, Serialize};

use cortege_core_types::{CemeteryId, CustomerId, Entity};

use crate::errors::Result;
use crate::hydration::{
    DateHydrator, EnumHydrator, Hydrator, IdHydrator, SchemaHydrator, WirePayload,
};
use crate::model::cemetery::NAME_MAX;
use crate::model::{Cemetery, CemeteryKind};
use crate::schema::{FieldRule, Schema};

/// Wire shape of a cemetery payload
///
/// `construction` carries date-only precision; `type` is the upstream's
/// field name for the plot kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CemeteryPayload {
    pub identifier: String,
    pub customer: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub construction: String,
    #[serde(rename = "inHouse")]
    pub in_house: bool,
}

impl WirePayload for CemeteryPayload {
    const ENTITY: &'static str = "cemetery";
}

/// Hydrator between [`Cemetery`] and [`CemeteryPayload`]
#[derive(Debug, Clone, Copy)]
pub struct CemeteryHydrator;

impl Hydrator for CemeteryHydrator {
    type Domain = Cemetery;
    type Payload = CemeteryPayload;

    fn hydrate(&self, payload: CemeteryPayload) -> Result<Cemetery> {
        let id = IdHydrator::<CemeteryId>::new().hydrate(payload.identifier)?;
        let customer = IdHydrator::<CustomerId>::new().hydrate(payload.customer)?;
        let kind = EnumHydrator::<CemeteryKind>::new().hydrate(payload.kind)?;
        let construction = DateHydrator.hydrate(payload.construction)?;

        Cemetery::new(id, customer, payload.name, kind, construction, payload.in_house)
            .map_err(Into::into)
    }

    fn dehydrate(&self, value: &Cemetery) -> CemeteryPayload {
        CemeteryPayload {
            identifier: value.id().as_str().to_string(),
            customer: value.customer().as_str().to_string(),
            name: value.name().to_string(),
            kind: EnumHydrator::<CemeteryKind>::new().dehydrate(&value.kind()),
            construction: DateHydrator.dehydrate(&value.construction()),
            in_house: value.in_house(),
        }
    }
}

impl SchemaHydrator for CemeteryHydrator {
    fn schema(&self) -> Schema {
        Schema::new(CemeteryPayload::ENTITY)
            .field("identifier", FieldRule::Uuid)
            .field("customer", FieldRule::Uuid)
            .field("name", FieldRule::Text { min: 1, max: NAME_MAX })
            .field("type", FieldRule::OneOf(CemeteryKind::WIRE_VALUES))
            .field("construction", FieldRule::Date)
            .field("inHouse", FieldRule::Boolean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn payload() -> CemeteryPayload {
        CemeteryPayload {
            identifier: "3d1c2b4a-5e6f-4a8b-9c0d-1e2f3a4b5c6d".to_string(),
            customer: "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4".to_string(),
            name: "Plot A".to_string(),
            kind: "FAMILY".to_string(),
            construction: "2020-01-01".to_string(),
            in_house: true,
        }
    }

    #[test]
    fn test_hydrates_construction_to_midnight_utc() {
        let cemetery = CemeteryHydrator.hydrate(payload()).unwrap();
        assert_eq!(
            cemetery.construction(),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_round_trip() {
        let cemetery = CemeteryHydrator.hydrate(payload()).unwrap();
        assert_eq!(CemeteryHydrator.dehydrate(&cemetery), payload());
    }

    #[test]
    fn test_as_payload_rejects_unknown_kind() {
        let raw = json!({
            "identifier": "3d1c2b4a-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
            "customer": "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4",
            "name": "Plot A",
            "type": "MUNICIPAL",
            "construction": "2020-01-01",
            "inHouse": true,
        });

        assert!(CemeteryHydrator.as_payload(raw).is_err());
    }

    #[test]
    fn test_serde_renames_match_wire() {
        let encoded = serde_json::to_value(payload()).unwrap();
        assert!(encoded.get("type").is_some());
        assert!(encoded.get("inHouse").is_some());
        assert!(encoded.get("kind").is_none());
    }
}
