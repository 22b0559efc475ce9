//! Lookup helpers for associative containers.
//!
//! Everything here probes exactly once and never inserts.  The probe type
//! `Q` is independent of the container's key type, so a map keyed on
//! `String` can be probed with a `&str` (or anything `KeyLike`, through
//! `find_str_ptr`) without building a temporary key.

use crate::{
    compare::KeyLike,
    deref::{DerefOrDefault, Fallback},
    error::{Error, Result},
};
use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// A container that can find the value stored under a `Q`-shaped key.
pub trait AssocLookup<Q: ?Sized> {
    type Value;

    fn lookup(&self, key: &Q) -> Option<&Self::Value>;

    fn lookup_mut(&mut self, key: &Q) -> Option<&mut Self::Value>;
}

impl<K, V, Q> AssocLookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &Q) -> Option<&mut V> {
        self.get_mut(key)
    }
}

impl<K, V, S, Q> AssocLookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &Q) -> Option<&mut V> {
        self.get_mut(key)
    }
}

/// The value stored under `key`, if any.
///
/// ```
/// use mapkey::{find_ptr, StringMap};
///
/// let dict: StringMap<i32> = [("abc".to_string(), 1)].into();
/// if let Some(v) = find_ptr(&dict, "abc") {
///     assert_eq!(*v, 1);
/// }
/// assert!(find_ptr(&dict, "bbb").is_none());
/// ```
pub fn find_ptr<'a, C, Q>(c: &'a C, key: &Q) -> Option<&'a C::Value>
where
    C: AssocLookup<Q> + ?Sized,
    Q: ?Sized,
{
    c.lookup(key)
}

pub fn find_ptr_mut<'a, C, Q>(c: &'a mut C, key: &Q) -> Option<&'a mut C::Value>
where
    C: AssocLookup<Q> + ?Sized,
    Q: ?Sized,
{
    c.lookup_mut(key)
}

/// Probe a `&str`-searchable container with any key-like representation.
pub fn find_str_ptr<'a, C, K>(c: &'a C, key: &K) -> Option<&'a C::Value>
where
    C: AssocLookup<str> + ?Sized,
    K: KeyLike + ?Sized,
{
    c.lookup(key.key_str())
}

/// Whether `key` is present.  If the plan is to insert on a miss, bind a
/// `MapKey` instead so the insert reuses the probe.
pub fn contains<C, Q>(c: &C, key: &Q) -> bool
where
    C: AssocLookup<Q> + ?Sized,
    Q: ?Sized,
{
    c.lookup(key).is_some()
}

/// The stored value, or `default` by reference.
pub fn find_or<'a, C, Q>(c: &'a C, key: &Q, default: &'a C::Value) -> &'a C::Value
where
    C: AssocLookup<Q> + ?Sized,
    Q: ?Sized,
{
    c.lookup(key).deref_or(default)
}

/// The stored value, copied, or the result of `f`, which only runs on a
/// miss.
pub fn find_or_else<C, Q, F>(c: &C, key: &Q, f: F) -> C::Value
where
    C: AssocLookup<Q> + ?Sized,
    C::Value: Clone,
    Q: ?Sized,
    F: FnOnce() -> C::Value,
{
    c.lookup(key).deref_or_else(f)
}

/// The stored value, copied, or the value type's default.
pub fn find_or_default<C, Q>(c: &C, key: &Q) -> C::Value
where
    C: AssocLookup<Q> + ?Sized,
    C::Value: Clone + Default,
    Q: ?Sized,
{
    c.lookup(key).deref_or_default()
}

pub fn find_or_fallback<'a, C, Q, F>(
    c: &'a C,
    key: &Q,
    fallback: Fallback<'a, C::Value, F>,
) -> Cow<'a, C::Value>
where
    C: AssocLookup<Q> + ?Sized,
    C::Value: Clone,
    Q: ?Sized,
    F: FnOnce() -> C::Value,
{
    c.lookup(key).deref_or_fallback(fallback)
}

/// The stored value, or `Error::NotFound` naming the key.
pub fn find_or_err<'a, C, Q>(c: &'a C, key: &Q) -> Result<&'a C::Value>
where
    C: AssocLookup<Q> + ?Sized,
    Q: std::fmt::Debug + ?Sized,
{
    c.lookup(key).ok_or_else(|| Error::not_found(key))
}
