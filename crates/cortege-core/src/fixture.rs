//! Fixture seeds for tests and test doubles
//!
//! Test setup sometimes has a ready-made domain object and sometimes only
//! a wire payload. The choice is the caller's, stated explicitly with a
//! tagged union — never inferred from the runtime shape of the value.

use crate::errors::Result;
use crate::hydration::Hydrator;

/// Explicit model-vs-payload fixture input
#[derive(Debug, Clone)]
pub enum Seed<T, P> {
    /// Already a domain object; used as-is
    Model(T),
    /// A wire payload; hydrated (and therefore validated) on resolve
    Payload(P),
}

impl<T, P> Seed<T, P> {
    /// Resolve the seed into a domain object
    ///
    /// # Errors
    ///
    /// Returns whatever the hydrator returns for a `Payload` seed; a
    /// `Model` seed cannot fail.
    pub fn into_model<H>(self, hydrator: &H) -> Result<T>
    where
        H: Hydrator<Domain = T, Payload = P>,
    {
        match self {
            Seed::Model(model) => Ok(model),
            Seed::Payload(payload) => hydrator.hydrate(payload),
        }
    }
}
