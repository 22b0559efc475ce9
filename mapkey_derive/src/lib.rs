use proc_macro::TokenStream;

mod derive_key_like;

/// Implement `mapkey::KeyLike` for a struct that wraps a string-like key.
///
/// The key field is the only field of a tuple or named struct, or the
/// field marked `#[key]`.  With `#[key_like(borrow)]` the struct also
/// implements `Borrow<str>`, so maps keyed on it can be probed with a
/// plain `&str`.  Only ask for that when the struct's `Eq`, `Ord` and
/// `Hash` agree with the key field's.
#[proc_macro_derive(KeyLike, attributes(key_like, key))]
pub fn derive_key_like(input: TokenStream) -> TokenStream {
    derive_key_like::derive_key_like(input)
}
