use serde::{Deserialize, Serialize};

use cortege_core_types::{CustomerId, Entity};

use crate::errors::Result;
use crate::hydration::{
    AddressHydrator, AddressPayload, Hydrator, IdHydrator, OptionalHydrator, PhoneHydrator,
    PrimitiveHydrator, SchemaHydrator, WirePayload,
};
use crate::model::customer::{EMAIL_MAX, NAME_MAX};
use crate::model::Customer;
use crate::schema::{FieldRule, Schema};

/// Wire shape of a customer payload
///
/// Identifiers are bare UUID strings, the address is a nested sub-object,
/// and `email` is `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub identifier: String,
    pub name: String,
    pub address: AddressPayload,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl WirePayload for CustomerPayload {
    const ENTITY: &'static str = "customer";
}

/// Hydrator between [`Customer`] and [`CustomerPayload`]
#[derive(Debug, Clone, Copy)]
pub struct CustomerHydrator;

impl Hydrator for CustomerHydrator {
    type Domain = Customer;
    type Payload = CustomerPayload;

    fn hydrate(&self, payload: CustomerPayload) -> Result<Customer> {
        let id = IdHydrator::<CustomerId>::new().hydrate(payload.identifier)?;
        let address = AddressHydrator.hydrate(payload.address)?;
        let phone = PhoneHydrator.hydrate(payload.phone)?;
        let email =
            OptionalHydrator::new(PrimitiveHydrator::<String>::new()).hydrate(payload.email)?;

        Customer::new(id, payload.name, address, phone, email).map_err(Into::into)
    }

    fn dehydrate(&self, value: &Customer) -> CustomerPayload {
        CustomerPayload {
            identifier: value.id().as_str().to_string(),
            name: value.name().to_string(),
            address: AddressHydrator.dehydrate(value.address()),
            phone: PhoneHydrator.dehydrate(value.phone()),
            email: value.email().map(str::to_string),
        }
    }
}

impl SchemaHydrator for CustomerHydrator {
    fn schema(&self) -> Schema {
        Schema::new(CustomerPayload::ENTITY)
            .field("identifier", FieldRule::Uuid)
            .field("name", FieldRule::Text { min: 1, max: NAME_MAX })
            .field(
                "address",
                FieldRule::Object(AddressHydrator::schema_fragment("customer.address")),
            )
            .field("phone", FieldRule::Text { min: 7, max: 20 })
            .optional("email", FieldRule::Text { min: 1, max: EMAIL_MAX })
    }
}
