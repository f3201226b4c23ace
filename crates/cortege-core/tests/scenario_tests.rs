// End-to-end scenarios across schema, hydration, and the domain model.

use chrono::{TimeZone, Utc};
use serde_json::json;

use cortege_core::errors::{DomainError, HydrationError};
use cortege_core::hydration::{
    CemeteryHydrator, Hydrator, ScheduleHydrator, SchemaHydrator, VisitCriteriaHydrator,
};
use cortege_core::model::CemeteryKind;

// ---------------------------------------------------------------------------
// Date truncation
// ---------------------------------------------------------------------------

#[test]
fn test_cemetery_construction_date_truncation() {
    let raw = json!({
        "identifier": "3d1c2b4a-5e6f-4a8b-9c0d-1e2f3a4b5c6d",
        "customer": "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4",
        "name": "Plot A",
        "type": "FAMILY",
        "construction": "2020-01-01",
        "inHouse": true,
    });

    let payload = CemeteryHydrator.as_payload(raw).unwrap();
    let cemetery = CemeteryHydrator.hydrate(payload).unwrap();

    // Hydrates to midnight UTC of that date
    assert_eq!(
        cemetery.construction(),
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(cemetery.kind(), CemeteryKind::Family);

    // Dehydrates back to the exact date string
    let out = CemeteryHydrator.dehydrate(&cemetery);
    assert_eq!(out.construction, "2020-01-01");
}

// ---------------------------------------------------------------------------
// Invariant propagation
// ---------------------------------------------------------------------------

#[test]
fn test_empty_participants_passes_schema_but_fails_hydrate() {
    let raw = json!({
        "identifier": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "customer": "11111111-1111-4111-8111-111111111111",
        "participants": [],
        "scheduledAt": "2024-05-01T10:00:00Z",
    });

    // Layer one: the shape is fine
    let payload = ScheduleHydrator.as_payload(raw).unwrap();

    // Layer two: the constructor invariant fires, and the error arrives
    // unmodified as a domain error
    let err = ScheduleHydrator.hydrate(payload).unwrap_err();
    match err {
        HydrationError::Domain(DomainError::EmptyParticipants { schedule_id }) => {
            assert_eq!(schedule_id, "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d");
        }
        other => panic!("expected EmptyParticipants, got {other:?}"),
    }
}

#[test]
fn test_contract_result_requires_phone_number() {
    let raw = json!({
        "identifier": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "customer": "11111111-1111-4111-8111-111111111111",
        "participants": ["11111111-1111-4111-8111-111111111111"],
        "scheduledAt": "2024-05-01T10:00:00Z",
        "result": "CONTRACT",
    });

    let payload = ScheduleHydrator.as_payload(raw).unwrap();
    let err = ScheduleHydrator.hydrate(payload).unwrap_err();
    assert_eq!(err.code(), "ERR_CONTRACT_REQUIRES_PHONE");
}

// ---------------------------------------------------------------------------
// Criteria as the untrusted-input path
// ---------------------------------------------------------------------------

#[test]
fn test_query_parameters_validated_before_use() {
    // A use case hydrates externally supplied parameters; on failure it
    // must not proceed to the repository
    let raw = json!({
        "customer": "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4",
        "from": "2024-12-31T00:00:00Z",
        "to": "2024-01-01T00:00:00Z",
    });

    let payload = VisitCriteriaHydrator.as_payload(raw).unwrap();
    let err = VisitCriteriaHydrator.hydrate(payload).unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_DATE_RANGE");
}
