//! Transparent string comparison for ordered maps.
//!
//! A `BTreeMap<String, V>` can already be probed with `&str` through
//! `Borrow<str>`.  `KeyLike` extends that to every representation of a
//! string key we pass around (views, `Cow`s, shared strings, NUL-terminated
//! views, newtype keys), and `TransparentLess` orders any two of them
//! without materializing an owned `String` on either side.

use std::{
    borrow::Cow,
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
    sync::Arc,
};

/// A value that can be viewed as a read-only `&str` without allocating.
///
/// The order induced on implementors is the byte-wise order of the views,
/// which is the natural order of `str` and `String`.
pub trait KeyLike {
    fn key_str(&self) -> &str;
}

impl KeyLike for str {
    fn key_str(&self) -> &str {
        self
    }
}

impl KeyLike for String {
    fn key_str(&self) -> &str {
        self.as_str()
    }
}

impl KeyLike for Cow<'_, str> {
    fn key_str(&self) -> &str {
        self
    }
}

impl<T: KeyLike + ?Sized> KeyLike for &T {
    fn key_str(&self) -> &str {
        (**self).key_str()
    }
}

impl<T: KeyLike + ?Sized> KeyLike for &mut T {
    fn key_str(&self) -> &str {
        (**self).key_str()
    }
}

macro_rules! impl_key_like_shared {
    ($($ptr:ident),*) => {
        $(impl KeyLike for $ptr<str> {
            fn key_str(&self) -> &str {
                self
            }
        })*
    };
}

impl_key_like_shared!(Box, Rc, Arc);

/// Stateless comparator over any pair of `KeyLike` values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransparentLess;

impl TransparentLess {
    pub fn less<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: KeyLike + ?Sized,
        B: KeyLike + ?Sized,
    {
        a.key_str() < b.key_str()
    }

    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: KeyLike + ?Sized,
        B: KeyLike + ?Sized,
    {
        a.key_str().cmp(b.key_str())
    }

    /// Neither `a < b` nor `b < a`.
    pub fn equivalent<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: KeyLike + ?Sized,
        B: KeyLike + ?Sized,
    {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Ordered map keyed on `String`, probed with any `&str`.
pub type StringMap<V = String> = BTreeMap<String, V>;

/// Ordered set of `String`s, probed with any `&str`.
pub type StringSet = BTreeSet<String>;
