//! Map and key bound together for single-probe find-or-insert.
//!
//! Avoids the anti-pattern of `contains_key`/`get` followed by `insert`,
//! which searches the tree twice:
//!
//! ```
//! use mapkey::{MapKey, StringMap};
//!
//! let mut counts: StringMap<u32> = StringMap::new();
//! for word in ["a", "b", "a"] {
//!     *MapKey::bind(&mut counts, word).value_or_insert_default() += 1;
//! }
//! assert_eq!(counts["a"], 2);
//! ```
//!
//! Binding probes the map once.  The handle keeps the map's own position
//! handle (a `btree_map::Entry`): on a hit, the slot of the equal key; on a
//! miss, the insertion point, so inserting through the handle does not
//! search again.  The handle holds the map's unique borrow for as long as
//! it lives, so nothing else can mutate the map under the cached position.
//!
//! Operations that may insert take the handle by value.  A handle inserts
//! at most once; binding again requires a new probe.

use crate::compare::KeyLike;
use std::{
    collections::btree_map::{BTreeMap, Entry},
    ops::{Deref, DerefMut},
};

pub struct MapKey<'a, K, V> {
    entry: Entry<'a, K, V>,
}

impl<K: std::fmt::Debug + Ord, V: std::fmt::Debug> std::fmt::Debug for MapKey<'_, K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapKey")
            .field("key", self.entry.key())
            .field("found", &self.found())
            .field("value", &self.value_ref())
            .finish()
    }
}

/// Outcome of `MapKey::assign` and `MapKey::emplace`: the value now stored
/// under the key, and whether getting there took an insertion.
#[derive(Debug)]
pub struct Assigned<'a, V> {
    /// `true` if the key was absent and a new entry was created, `false` if
    /// an existing value was overwritten.
    pub inserted: bool,
    pub value: &'a mut V,
}

impl<'a, V> Assigned<'a, V> {
    pub fn into_mut(self) -> &'a mut V {
        self.value
    }
}

impl<V> Deref for Assigned<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.value
    }
}

impl<V> DerefMut for Assigned<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.value
    }
}

impl<'a, K: Ord, V> MapKey<'a, K, V> {
    /// Probe `map` for `key` exactly once.
    ///
    /// The key is converted to an owned `K` before the probe, even when it
    /// turns out to be present: binding a `&str` into a `String`-keyed map
    /// allocates.  Read-only lookups on hot paths should use `find_ptr`.
    pub fn bind<Q: Into<K>>(map: &'a mut BTreeMap<K, V>, key: Q) -> Self {
        Self { entry: map.entry(key.into()) }
    }

    /// `bind` for string-keyed maps, taking any key-like value
    /// (`Arc<str>`, `CStrView`, a derived newtype, ...).
    pub fn bind_str<Q>(map: &'a mut BTreeMap<K, V>, key: &Q) -> Self
    where
        Q: KeyLike + ?Sized,
        K: for<'x> From<&'x str>,
    {
        Self::bind(map, K::from(key.key_str()))
    }

    pub fn found(&self) -> bool {
        matches!(self.entry, Entry::Occupied(_))
    }

    pub fn key(&self) -> &K {
        self.entry.key()
    }

    pub fn value_ref(&self) -> Option<&V> {
        match &self.entry {
            Entry::Occupied(o) => Some(o.get()),
            Entry::Vacant(_) => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        match &mut self.entry {
            Entry::Occupied(o) => Some(o.get_mut()),
            Entry::Vacant(_) => None,
        }
    }

    /// The found value, borrowed for as long as the map.
    pub fn into_value(self) -> Option<&'a mut V> {
        match self.entry {
            Entry::Occupied(o) => Some(o.into_mut()),
            Entry::Vacant(_) => None,
        }
    }

    /// Like indexing with auto-vivification: inserts `V::default()` if the
    /// key is absent.
    pub fn value_or_insert_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.value_or_insert_with(V::default)
    }

    pub fn value_or_insert(self, value: V) -> &'a mut V {
        self.value_or_insert_with(|| value)
    }

    /// `f` is invoked only if the key is absent.
    pub fn value_or_insert_with<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self.entry {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => {
                #[cfg(feature = "log")]
                log::trace!("inserting {} for absent key", std::any::type_name::<V>());
                v.insert(f())
            }
        }
    }

    /// Fallible `value_or_insert_with`.  An error from `f` is returned
    /// unchanged and nothing is inserted.
    pub fn try_value_or_insert_with<F, E>(self, f: F) -> Result<&'a mut V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entry {
            Entry::Occupied(o) => Ok(o.into_mut()),
            Entry::Vacant(v) => {
                let value = f()?;
                #[cfg(feature = "log")]
                log::trace!("inserting {} for absent key", std::any::type_name::<V>());
                Ok(v.insert(value))
            }
        }
    }

    /// Construct the value from `args` only if the key is absent.
    pub fn value_or_emplace<A: Into<V>>(self, args: A) -> &'a mut V {
        self.value_or_insert_with(|| args.into())
    }

    /// Overwrite the value if found, otherwise insert it at the cached
    /// position.
    pub fn assign(self, value: V) -> Assigned<'a, V> {
        match self.entry {
            Entry::Occupied(mut o) => {
                #[cfg(feature = "log")]
                log::trace!("overwriting {}", std::any::type_name::<V>());
                o.insert(value);
                Assigned { inserted: false, value: o.into_mut() }
            }
            Entry::Vacant(v) => {
                #[cfg(feature = "log")]
                log::trace!("inserting {}", std::any::type_name::<V>());
                Assigned { inserted: true, value: v.insert(value) }
            }
        }
    }

    /// `assign` with the value constructed from `args`.
    pub fn emplace<A: Into<V>>(self, args: A) -> Assigned<'a, V> {
        self.assign(args.into())
    }
}

pub fn map_key<'a, K, V, Q>(map: &'a mut BTreeMap<K, V>, key: Q) -> MapKey<'a, K, V>
where
    K: Ord,
    Q: Into<K>,
{
    MapKey::bind(map, key)
}

pub trait MapKeyExt<K, V> {
    fn key_handle<Q: Into<K>>(&mut self, key: Q) -> MapKey<'_, K, V>;
}

impl<K: Ord, V> MapKeyExt<K, V> for BTreeMap<K, V> {
    fn key_handle<Q: Into<K>>(&mut self, key: Q) -> MapKey<'_, K, V> {
        MapKey::bind(self, key)
    }
}
