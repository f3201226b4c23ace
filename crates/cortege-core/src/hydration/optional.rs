use crate::errors::Result;
use crate::hydration::Hydrator;

/// Null-safe wrapper around an inner hydrator
///
/// `None` — a wire `null` or an absent field — short-circuits in both
/// directions without invoking the inner hydrator. Absence is exactly
/// `None`: a present-but-falsy payload value (`0`, `false`, `""`) is
/// `Some` and always reaches the inner hydrator.
#[derive(Debug)]
pub struct OptionalHydrator<H> {
    inner: H,
}

impl<H> OptionalHydrator<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Hydrator> Hydrator for OptionalHydrator<H> {
    type Domain = Option<H::Domain>;
    type Payload = Option<H::Payload>;

    fn hydrate(&self, payload: Option<H::Payload>) -> Result<Option<H::Domain>> {
        match payload {
            None => Ok(None),
            Some(inner) => self.inner.hydrate(inner).map(Some),
        }
    }

    fn dehydrate(&self, value: &Option<H::Domain>) -> Option<H::Payload> {
        value.as_ref().map(|inner| self.inner.dehydrate(inner))
    }
}
