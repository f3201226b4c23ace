use crate::errors::Result;
use crate::hydration::Hydrator;

/// Lifts a tuple of per-field hydrators into a hydrator over the whole
/// tuple
///
/// Each position hydrates independently of the others; the first failing
/// position aborts the whole operation and no partial tuple is produced.
/// Implemented for tuples of arity 1 through 6.
#[derive(Debug)]
pub struct CombinedHydrator<T> {
    inner: T,
}

impl<T> CombinedHydrator<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

macro_rules! combined_tuple {
    ($($H:ident => $idx:tt),+) => {
        impl<$($H: Hydrator),+> Hydrator for CombinedHydrator<($($H,)+)> {
            type Domain = ($($H::Domain,)+);
            type Payload = ($($H::Payload,)+);

            fn hydrate(&self, payload: Self::Payload) -> Result<Self::Domain> {
                Ok(($(self.inner.$idx.hydrate(payload.$idx)?,)+))
            }

            fn dehydrate(&self, value: &Self::Domain) -> Self::Payload {
                ($(self.inner.$idx.dehydrate(&value.$idx),)+)
            }
        }
    };
}

combined_tuple!(H0 => 0);
combined_tuple!(H0 => 0, H1 => 1);
combined_tuple!(H0 => 0, H1 => 1, H2 => 2);
combined_tuple!(H0 => 0, H1 => 1, H2 => 2, H3 => 3);
combined_tuple!(H0 => 0, H1 => 1, H2 => 2, H3 => 3, H4 => 4);
combined_tuple!(H0 => 0, H1 => 1, H2 => 2, H3 => 3, H4 => 4, H5 => 5);
