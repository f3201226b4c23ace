use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::errors::{Result, SchemaError};
use crate::hydration::Hydrator;

/// Codec between a wire object key and a key payload value
///
/// JSON object keys are always strings, so composite key payloads travel
/// as a structured string encoding. Decoding attempts the structured parse
/// first and falls back to the raw string where the impl allows it.
///
/// Contract: `encode` must be injective over the key payloads a map can
/// produce — two distinct domain keys must never encode to the same wire
/// key. The map hydrator enforces the mirror-image property on the way in
/// by rejecting wire keys that collide after decoding.
pub trait WireKey: Sized {
    /// Decode a wire object key
    ///
    /// # Errors
    ///
    /// Returns `MalformedKey` when the impl has no raw-string fallback and
    /// the structured parse fails.
    fn decode(raw: &str) -> Result<Self>;

    /// Encode into a wire object key
    fn encode(&self) -> String;
}

impl WireKey for String {
    // A JSON-quoted key was structured by a prior encode; anything else is
    // the key itself.
    fn decode(raw: &str) -> Result<Self> {
        match serde_json::from_str::<String>(raw) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Ok(raw.to_string()),
        }
    }

    fn encode(&self) -> String {
        self.clone()
    }
}

impl WireKey for i64 {
    fn decode(raw: &str) -> Result<Self> {
        raw.parse::<i64>().map_err(|_| {
            SchemaError::MalformedKey {
                raw: raw.to_string(),
            }
            .into()
        })
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

impl WireKey for u32 {
    fn decode(raw: &str) -> Result<Self> {
        raw.parse::<u32>().map_err(|_| {
            SchemaError::MalformedKey {
                raw: raw.to_string(),
            }
            .into()
        })
    }

    fn encode(&self) -> String {
        self.to_string()
    }
}

/// Keyed container a map hydrator can produce
///
/// Selects the ordering behavior at the type level: `BTreeMap` keeps a
/// deterministic key order, `HashMap` does not.
pub trait MapStore<K, V>: Default {
    /// Insert, returning the previous value on key collision
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Iterate all entries
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>
    where
        K: 'a,
        V: 'a;
}

impl<K: Ord, V> MapStore<K, V> for BTreeMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>
    where
        K: 'a,
        V: 'a,
    {
        Box::new(self.iter())
    }
}

impl<K: Hash + Eq, V> MapStore<K, V> for HashMap<K, V> {
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>
    where
        K: 'a,
        V: 'a,
    {
        Box::new(self.iter())
    }
}

/// Hydrates a whole keyed mapping through a key/value hydrator pair
///
/// Keys pass through [`WireKey`] decoding and then the key hydrator —
/// keys are re-derived, not copied. Two wire keys that decode and hydrate
/// to the same domain key are a collision and fail hydration explicitly;
/// nothing is silently dropped.
#[derive(Debug)]
pub struct MapHydrator<KH, VH, M> {
    key: KH,
    value: VH,
    _store: PhantomData<M>,
}

impl<KH, VH, M> MapHydrator<KH, VH, M> {
    pub fn new(key: KH, value: VH) -> Self {
        Self {
            key,
            value,
            _store: PhantomData,
        }
    }
}

/// Map hydrator producing a deterministically ordered mapping
pub type OrderedMapHydrator<KH, VH> =
    MapHydrator<KH, VH, BTreeMap<<KH as Hydrator>::Domain, <VH as Hydrator>::Domain>>;

/// Map hydrator producing an unordered mapping
pub type UnorderedMapHydrator<KH, VH> =
    MapHydrator<KH, VH, HashMap<<KH as Hydrator>::Domain, <VH as Hydrator>::Domain>>;

impl<KH, VH, M> Hydrator for MapHydrator<KH, VH, M>
where
    KH: Hydrator,
    KH::Payload: WireKey,
    VH: Hydrator,
    M: MapStore<KH::Domain, VH::Domain>,
{
    type Domain = M;
    type Payload = BTreeMap<String, VH::Payload>;

    fn hydrate(&self, payload: Self::Payload) -> Result<M> {
        let mut out = M::default();
        for (raw_key, value_payload) in payload {
            let key_payload = KH::Payload::decode(&raw_key)?;
            let key = self.key.hydrate(key_payload)?;
            let value = self.value.hydrate(value_payload)?;
            if out.insert(key, value).is_some() {
                return Err(SchemaError::DuplicateKey { key: raw_key }.into());
            }
        }
        Ok(out)
    }

    fn dehydrate(&self, value: &M) -> Self::Payload {
        value
            .entries()
            .map(|(k, v)| (self.key.dehydrate(k).encode(), self.value.dehydrate(v)))
            .collect()
    }
}
