//! Helpers for working with ordered maps and optional values.
//!
//! - `compare`: transparent string-key comparison, so a map keyed on
//!   `String` can be searched with a `&str`, a `Cow`, a `CStrView`, ...
//! - `deref` and `find`: value-or-default access through `Option<&T>` and
//!   through map lookups, with lazily computed defaults.
//! - `map_key`: `MapKey`, which probes a `BTreeMap` once and reuses the
//!   position for the read, insert or update that follows.
//!
//! Plus two small collaborators: `CStrView`, a NUL-terminated string view,
//! and `Scoper`, a scope guard.

extern crate self as mapkey;

pub mod compare;
pub mod cstr_view;
pub mod deref;
pub mod error;
pub mod find;
pub mod map_key;
pub mod scoper;

pub use compare::{KeyLike, StringMap, StringSet, TransparentLess};
pub use cstr_view::CStrView;
pub use deref::{deref_or, deref_or_default, deref_or_else, DerefOrDefault, Fallback, OwningPtr};
pub use error::{Error, Result};
pub use find::{
    contains, find_or, find_or_default, find_or_else, find_or_err, find_or_fallback, find_ptr,
    find_ptr_mut, find_str_ptr, AssocLookup,
};
#[cfg(feature = "derive")]
pub use mapkey_derive::KeyLike;
pub use map_key::{map_key, Assigned, MapKey, MapKeyExt};
pub use scoper::Scoper;
