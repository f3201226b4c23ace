use std::marker::PhantomData;

use cortege_core_types::TypedId;

use crate::errors::Result;
use crate::hydration::Hydrator;

/// Hydrates a bare UUID wire string into a typed entity id
///
/// One generic hydrator covers every id type; the nominal distinction
/// between ids is kept by the type parameter, so an id hydrated for one
/// entity cannot flow into another's field.
#[derive(Debug)]
pub struct IdHydrator<I>(PhantomData<I>);

impl<I> IdHydrator<I> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<I> Default for IdHydrator<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: TypedId> Hydrator for IdHydrator<I> {
    type Domain = I;
    type Payload = String;

    fn hydrate(&self, payload: String) -> Result<I> {
        I::from_string(payload).map_err(Into::into)
    }

    fn dehydrate(&self, value: &I) -> String {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortege_core_types::CustomerId;

    #[test]
    fn test_round_trip() {
        let hydrator = IdHydrator::<CustomerId>::new();
        let raw = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d".to_string();

        let id = hydrator.hydrate(raw.clone()).unwrap();
        assert_eq!(hydrator.dehydrate(&id), raw);
    }

    #[test]
    fn test_invalid_uuid_rejected() {
        let hydrator = IdHydrator::<CustomerId>::new();
        assert!(hydrator.hydrate("bogus".to_string()).is_err());
    }
}
