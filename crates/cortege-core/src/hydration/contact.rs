use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::hydration::Hydrator;
use crate::model::{Address, PhoneNumber};
use crate::schema::{FieldRule, Schema};

/// Wire shape of the nested address sub-object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
}

/// Hydrates the nested address sub-object
///
/// Not an entity hydrator — the address travels inside the customer
/// payload — but it still has a schema fragment so the customer schema can
/// check the nested object in place.
#[derive(Debug, Clone, Copy)]
pub struct AddressHydrator;

impl AddressHydrator {
    /// Schema fragment for embedding under a parent schema
    pub fn schema_fragment(parent: &'static str) -> Schema {
        Schema::new(parent)
            .field("line1", FieldRule::Text { min: 1, max: 120 })
            .optional("line2", FieldRule::Text { min: 1, max: 120 })
            .field("city", FieldRule::Text { min: 1, max: 80 })
            .field("postalCode", FieldRule::Text { min: 3, max: 10 })
    }
}

impl Hydrator for AddressHydrator {
    type Domain = Address;
    type Payload = AddressPayload;

    fn hydrate(&self, payload: AddressPayload) -> Result<Address> {
        Address::new(
            payload.line1,
            payload.line2,
            payload.city,
            payload.postal_code,
        )
        .map_err(Into::into)
    }

    fn dehydrate(&self, value: &Address) -> AddressPayload {
        AddressPayload {
            line1: value.line1().to_string(),
            line2: value.line2().map(str::to_string),
            city: value.city().to_string(),
            postal_code: value.postal_code().to_string(),
        }
    }
}

/// Hydrates a bare phone-number wire string
#[derive(Debug, Clone, Copy)]
pub struct PhoneHydrator;

impl Hydrator for PhoneHydrator {
    type Domain = PhoneNumber;
    type Payload = String;

    fn hydrate(&self, payload: String) -> Result<PhoneNumber> {
        PhoneNumber::new(payload).map_err(Into::into)
    }

    fn dehydrate(&self, value: &PhoneNumber) -> String {
        value.as_str().to_string()
    }
}
