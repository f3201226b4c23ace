use std::marker::PhantomData;

use crate::errors::Result;
use crate::hydration::Hydrator;
use crate::model::{CemeteryKind, ScheduleResult};

/// Domain enum with a fixed upstream token set
pub trait WireEnum: Sized {
    /// Wire tokens accepted by the upstream
    const VALUES: &'static [&'static str];

    /// Decode an upstream token
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariant` for tokens outside [`Self::VALUES`].
    fn decode(value: &str) -> Result<Self>;

    /// Encode to the upstream token
    fn token(&self) -> &'static str;
}

impl WireEnum for CemeteryKind {
    const VALUES: &'static [&'static str] = CemeteryKind::WIRE_VALUES;

    fn decode(value: &str) -> Result<Self> {
        CemeteryKind::from_wire(value).map_err(Into::into)
    }

    fn token(&self) -> &'static str {
        self.as_wire()
    }
}

impl WireEnum for ScheduleResult {
    const VALUES: &'static [&'static str] = ScheduleResult::WIRE_VALUES;

    fn decode(value: &str) -> Result<Self> {
        ScheduleResult::from_wire(value).map_err(Into::into)
    }

    fn token(&self) -> &'static str {
        self.as_wire()
    }
}

/// Hydrates an upstream enum token string into its domain enum
#[derive(Debug)]
pub struct EnumHydrator<E>(PhantomData<E>);

impl<E> EnumHydrator<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for EnumHydrator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum> Hydrator for EnumHydrator<E> {
    type Domain = E;
    type Payload = String;

    fn hydrate(&self, payload: String) -> Result<E> {
        E::decode(&payload)
    }

    fn dehydrate(&self, value: &E) -> String {
        value.token().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{HydrationError, SchemaError};

    #[test]
    fn test_round_trip_all_tokens() {
        let hydrator = EnumHydrator::<CemeteryKind>::new();
        for token in CemeteryKind::WIRE_VALUES {
            let kind = hydrator.hydrate(token.to_string()).unwrap();
            assert_eq!(hydrator.dehydrate(&kind), *token);
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        let hydrator = EnumHydrator::<ScheduleResult>::new();
        let err = hydrator.hydrate("POSTPONED".to_string()).unwrap_err();
        assert!(matches!(
            err,
            HydrationError::Schema(SchemaError::UnknownVariant { .. })
        ));
    }
}
