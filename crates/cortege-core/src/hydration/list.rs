use crate::errors::Result;
use crate::hydration::Hydrator;

/// Hydrates a whole ordered sequence through an inner hydrator
///
/// Order is preserved in both directions. The first failing element aborts
/// the whole operation; no partial list is ever produced.
#[derive(Debug)]
pub struct ListHydrator<H> {
    inner: H,
}

impl<H> ListHydrator<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Hydrator> Hydrator for ListHydrator<H> {
    type Domain = Vec<H::Domain>;
    type Payload = Vec<H::Payload>;

    fn hydrate(&self, payload: Vec<H::Payload>) -> Result<Vec<H::Domain>> {
        payload
            .into_iter()
            .map(|element| self.inner.hydrate(element))
            .collect()
    }

    fn dehydrate(&self, value: &Vec<H::Domain>) -> Vec<H::Payload> {
        value
            .iter()
            .map(|element| self.inner.dehydrate(element))
            .collect()
    }
}
