use std::str::Utf8Error;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unterminated input to CStrView")]
    Unterminated,
    #[error("interior nul byte at position {position}")]
    InteriorNul { position: usize },
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
    #[error("key not found: {key}")]
    NotFound { key: String },
}

impl Error {
    pub(crate) fn not_found<Q: std::fmt::Debug + ?Sized>(key: &Q) -> Self {
        Error::NotFound { key: format!("{key:?}") }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
