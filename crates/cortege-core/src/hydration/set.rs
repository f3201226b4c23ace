use std::collections::BTreeSet;

use crate::errors::Result;
use crate::hydration::Hydrator;

/// Hydrates an unordered collection with structural de-duplication
///
/// Two payload elements that become structurally equal after the inner
/// hydration collapse into one domain element. Dehydration emits the set's
/// ascending iteration order, which is deterministic but unrelated to the
/// original wire order.
#[derive(Debug)]
pub struct SetHydrator<H> {
    inner: H,
}

impl<H> SetHydrator<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Hydrator> Hydrator for SetHydrator<H>
where
    H::Domain: Ord,
{
    type Domain = BTreeSet<H::Domain>;
    type Payload = Vec<H::Payload>;

    fn hydrate(&self, payload: Vec<H::Payload>) -> Result<BTreeSet<H::Domain>> {
        payload
            .into_iter()
            .map(|element| self.inner.hydrate(element))
            .collect()
    }

    fn dehydrate(&self, value: &BTreeSet<H::Domain>) -> Vec<H::Payload> {
        value
            .iter()
            .map(|element| self.inner.dehydrate(element))
            .collect()
    }
}
