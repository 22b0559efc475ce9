//! Borrowed string view that is guaranteed to be NUL-terminated.
//!
//! For interfaces that hand the string on to C APIs.  If termination does
//! not matter, take a `&str`.
//!
//! The view is UTF-8 (so it can be used as a map key next to `String`s)
//! and the byte after its last character is always `\0`.  Operations that
//! could not keep that invariant, like truncating the end or taking an
//! arbitrary substring, are not provided.

use crate::{
    compare::KeyLike,
    error::{Error, Result},
};
use serde::{Serialize, Serializer};
use std::{
    cmp::Ordering,
    ffi::{c_char, CStr},
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

#[derive(Clone, Copy)]
pub struct CStrView<'a> {
    c_str: &'a CStr,
    s: &'a str,
}

impl<'a> CStrView<'a> {
    pub fn new(c_str: &'a CStr) -> Result<Self> {
        let s = c_str.to_str()?;
        Ok(Self { c_str, s })
    }

    /// View `bytes`, whose last byte must be the only NUL.
    ///
    /// Stricter than a length-plus-terminator check: an interior NUL is
    /// rejected with `Error::InteriorNul`, since C would see the string end
    /// there and `CStr` cannot hold one.
    pub fn from_bytes_with_nul(bytes: &'a [u8]) -> Result<Self> {
        let position = match bytes.iter().position(|&b| b == 0) {
            Some(position) => position,
            None => {
                #[cfg(feature = "log")]
                log::debug!("rejecting unterminated input of {} bytes", bytes.len());
                return Err(Error::Unterminated);
            }
        };
        if position + 1 != bytes.len() {
            return Err(Error::InteriorNul { position });
        }
        let c_str = CStr::from_bytes_with_nul(bytes).map_err(|_| Error::Unterminated)?;
        Self::new(c_str)
    }

    /// View `s`, which must end in its only `\0`.
    pub fn from_str_with_nul(s: &'a str) -> Result<Self> {
        Self::from_bytes_with_nul(s.as_bytes())
    }

    /// Without the terminator.
    pub fn as_str(&self) -> &'a str {
        self.s
    }

    pub fn as_c_str(&self) -> &'a CStr {
        self.c_str
    }

    /// Pointer to the terminated string, valid for `'a`.
    pub fn as_ptr(&self) -> *const c_char {
        self.c_str.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.s.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.s.ends_with(suffix)
    }

    /// Dropping a prefix keeps the terminator, so this stays a `CStrView`.
    pub fn strip_prefix(&self, prefix: &str) -> Option<CStrView<'a>> {
        let s = self.s.strip_prefix(prefix)?;
        let c_str: &'a CStr = self.c_str;
        let rest = &c_str.to_bytes_with_nul()[prefix.len()..];
        let c_str = CStr::from_bytes_with_nul(rest).ok()?;
        Some(CStrView { c_str, s })
    }
}

impl Default for CStrView<'_> {
    fn default() -> Self {
        Self { c_str: Default::default(), s: "" }
    }
}

impl<'a> TryFrom<&'a CStr> for CStrView<'a> {
    type Error = Error;

    fn try_from(c_str: &'a CStr) -> Result<Self> {
        Self::new(c_str)
    }
}

impl Deref for CStrView<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        self.s
    }
}

impl AsRef<str> for CStrView<'_> {
    fn as_ref(&self) -> &str {
        self.s
    }
}

impl AsRef<CStr> for CStrView<'_> {
    fn as_ref(&self) -> &CStr {
        self.c_str
    }
}

impl KeyLike for CStrView<'_> {
    fn key_str(&self) -> &str {
        self.s
    }
}

impl From<CStrView<'_>> for String {
    fn from(view: CStrView<'_>) -> Self {
        view.s.to_owned()
    }
}

impl fmt::Debug for CStrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.s, f)
    }
}

impl fmt::Display for CStrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.s)
    }
}

impl PartialEq for CStrView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s
    }
}

impl Eq for CStrView<'_> {}

impl PartialEq<str> for CStrView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.s == other
    }
}

impl PartialEq<&str> for CStrView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.s == *other
    }
}

impl PartialOrd for CStrView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CStrView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.s.cmp(other.s)
    }
}

impl Hash for CStrView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.s.hash(state)
    }
}

impl Serialize for CStrView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.s)
    }
}
