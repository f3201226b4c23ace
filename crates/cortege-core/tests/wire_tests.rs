// Integration tests for the wire boundary helpers and fixture seeds.

use cortege_core::fixture::Seed;
use cortege_core::hydration::{
    CustomerHydrator, CustomerPayload, AddressPayload, Hydrator, ScheduleHydrator,
};
use cortege_core::logging::{init, Profile};
use cortege_core::wire::{read_entries, read_entry, write_entry};

fn customer_payload() -> CustomerPayload {
    CustomerPayload {
        identifier: "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4".to_string(),
        name: "Sato Ichiro".to_string(),
        address: AddressPayload {
            line1: "1-2-3 Yanaka".to_string(),
            line2: None,
            city: "Taito".to_string(),
            postal_code: "110-0001".to_string(),
        },
        phone: "090-1234-5678".to_string(),
        email: None,
    }
}

const CUSTOMER_TEXT: &str = r#"{
    "identifier": "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4",
    "name": "Sato Ichiro",
    "address": {"line1": "1-2-3 Yanaka", "city": "Taito", "postalCode": "110-0001"},
    "phone": "090-1234-5678",
    "email": null
}"#;

#[test]
fn test_read_entry_produces_domain_object() {
    init(Profile::Test);

    let customer = read_entry(&CustomerHydrator, CUSTOMER_TEXT).unwrap();
    assert_eq!(customer.name(), "Sato Ichiro");
    assert_eq!(customer.email(), None);
}

#[test]
fn test_read_entries_hydrates_every_element() {
    init(Profile::Test);

    let listing = format!("[{CUSTOMER_TEXT}, {CUSTOMER_TEXT}]");
    let customers = read_entries(&CustomerHydrator, &listing).unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0], customers[1]);
}

#[test]
fn test_read_entries_aborts_on_first_bad_element() {
    init(Profile::Test);

    let listing = format!("[{CUSTOMER_TEXT}, {{\"name\": \"broken\"}}]");
    assert!(read_entries(&CustomerHydrator, &listing).is_err());
}

#[test]
fn test_write_entry_reproduces_upstream_body() {
    init(Profile::Test);

    let customer = CustomerHydrator.hydrate(customer_payload()).unwrap();
    let body = write_entry(&CustomerHydrator, &customer).unwrap();

    let reparsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(reparsed["identifier"], "7f1d9bd0-3a41-4c6a-9e52-08a7c3f1b2d4");
    assert_eq!(reparsed["address"]["postalCode"], "110-0001");
    assert_eq!(reparsed["email"], serde_json::Value::Null);
}

#[test]
fn test_schema_failure_surfaces_through_read() {
    init(Profile::Test);

    let err = read_entry(&ScheduleHydrator, CUSTOMER_TEXT).unwrap_err();
    assert_eq!(err.code(), "ERR_MISSING_FIELD");
}

// ---------------------------------------------------------------------------
// Fixture seeds
// ---------------------------------------------------------------------------

#[test]
fn test_model_seed_used_verbatim() {
    let customer = CustomerHydrator.hydrate(customer_payload()).unwrap();
    let seed = Seed::Model(customer.clone());

    assert_eq!(seed.into_model(&CustomerHydrator).unwrap(), customer);
}

#[test]
fn test_payload_seed_goes_through_hydration() {
    let seed = Seed::Payload(customer_payload());
    let customer = seed.into_model(&CustomerHydrator).unwrap();
    assert_eq!(customer.name(), "Sato Ichiro");
}

#[test]
fn test_payload_seed_surfaces_invariant_failures() {
    let mut payload = customer_payload();
    payload.phone = "short".to_string();

    let seed = Seed::Payload(payload);
    assert!(seed.into_model(&CustomerHydrator).is_err());
}
