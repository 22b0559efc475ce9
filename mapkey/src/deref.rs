//! Value-or-default access through optional references.
//!
//! A lookup that may miss hands back an `Option<&T>`.  These helpers turn
//! that into a value, choosing between a caller-owned default (returned by
//! reference) and a computed one (returned by value, computed only on a
//! miss).

use std::{borrow::Cow, rc::Rc, sync::Arc};

/// The default to fall back on when a lookup misses.
///
/// The caller picks the shape; nothing inspects `F` at runtime.
#[derive(Debug, Clone, Copy)]
pub enum Fallback<'a, T, F> {
    /// Caller-owned value, handed back by reference.
    Value(&'a T),
    /// Zero-argument producer, invoked at most once and only on a miss.
    With(F),
}

impl<'a, T> Fallback<'a, T, fn() -> T> {
    pub fn value(value: &'a T) -> Self {
        Fallback::Value(value)
    }
}

impl<'a, T, F: FnOnce() -> T> Fallback<'a, T, F> {
    pub fn with(f: F) -> Self {
        Fallback::With(f)
    }
}

/// An owning pointer that may be looked through to borrow its pointee.
///
/// `Option<P>` counts as a nullable owner: it has no pointee when empty.
pub trait OwningPtr {
    type Pointee: ?Sized;

    fn pointee(&self) -> Option<&Self::Pointee>;
}

macro_rules! impl_owning_ptr {
    ($($ptr:ident),*) => {
        $(impl<P: ?Sized> OwningPtr for $ptr<P> {
            type Pointee = P;

            fn pointee(&self) -> Option<&P> {
                Some(&**self)
            }
        })*
    };
}

impl_owning_ptr!(Box, Rc, Arc);

impl<Q: OwningPtr> OwningPtr for Option<Q> {
    type Pointee = Q::Pointee;

    fn pointee(&self) -> Option<&Q::Pointee> {
        self.as_ref().and_then(OwningPtr::pointee)
    }
}

pub trait DerefOrDefault<'a, T: 'a> {
    /// The referenced value, copied, or `T::default()`.
    fn deref_or_default(self) -> T
    where
        T: Clone + Default;

    /// The reference, or `default` by reference.
    fn deref_or(self, default: &'a T) -> &'a T;

    /// The referenced value, copied, or the result of `f`.  `f` is not
    /// called when a value is present.
    fn deref_or_else<F>(self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T;

    /// Borrowed when present or when the fallback is a value, owned when
    /// the fallback had to be computed.
    fn deref_or_fallback<F>(self, fallback: Fallback<'a, T, F>) -> Cow<'a, T>
    where
        T: Clone,
        F: FnOnce() -> T;

    /// Look through a reference to an owning pointer, borrowing the
    /// pointee instead of copying or moving the owner.
    fn deref_ptr(self) -> Option<&'a T::Pointee>
    where
        T: OwningPtr;
}

impl<'a, T: 'a> DerefOrDefault<'a, T> for Option<&'a T> {
    fn deref_or_default(self) -> T
    where
        T: Clone + Default,
    {
        match self {
            Some(t) => t.clone(),
            None => T::default(),
        }
    }

    fn deref_or(self, default: &'a T) -> &'a T {
        self.unwrap_or(default)
    }

    fn deref_or_else<F>(self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self {
            Some(t) => t.clone(),
            None => f(),
        }
    }

    fn deref_or_fallback<F>(self, fallback: Fallback<'a, T, F>) -> Cow<'a, T>
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match (self, fallback) {
            (Some(t), _) => Cow::Borrowed(t),
            (None, Fallback::Value(d)) => Cow::Borrowed(d),
            (None, Fallback::With(f)) => Cow::Owned(f()),
        }
    }

    fn deref_ptr(self) -> Option<&'a T::Pointee>
    where
        T: OwningPtr,
    {
        self.and_then(OwningPtr::pointee)
    }
}

pub fn deref_or_default<T: Clone + Default>(opt: Option<&T>) -> T {
    opt.deref_or_default()
}

pub fn deref_or<'a, T>(opt: Option<&'a T>, default: &'a T) -> &'a T {
    opt.deref_or(default)
}

pub fn deref_or_else<T: Clone, F: FnOnce() -> T>(opt: Option<&T>, f: F) -> T {
    opt.deref_or_else(f)
}
