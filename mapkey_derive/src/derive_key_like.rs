use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Data, DeriveInput, Fields, Ident, Member, Token,
};

pub fn derive_key_like(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    let args = match input.attrs.iter().find(|attr| attr.path().is_ident("key_like")) {
        Some(attr) => attr.parse_args::<KeyLikeArgs>()?,
        None => KeyLikeArgs::default(),
    };

    let fields = match &input.data {
        Data::Struct(data_struct) => &data_struct.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "KeyLike can only be derived for structs",
            ))
        }
    };

    // Pick the key field: the sole field, or the one tagged #[key].
    let all: Vec<_> = match fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
        Fields::Unit => vec![],
    };
    let tagged: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, f)| f.attrs.iter().any(|attr| attr.path().is_ident("key")))
        .map(|(i, _)| i)
        .collect();
    let index = match (all.len(), tagged.as_slice()) {
        (1, []) => 0,
        (_, [i]) => *i,
        (0, _) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "KeyLike requires a field holding the key",
            ))
        }
        (_, []) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "mark the key field with #[key]",
            ))
        }
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "only one field may be marked #[key]",
            ))
        }
    };
    let member = match &all[index].ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(syn::Index::from(index)),
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let key_like_impl = quote! {
        impl #impl_generics ::mapkey::KeyLike for #struct_name #ty_generics #where_clause {
            fn key_str(&self) -> &str {
                ::mapkey::KeyLike::key_str(&self.#member)
            }
        }
    };

    let borrow_impl = if args.borrow {
        quote! {
            impl #impl_generics ::std::borrow::Borrow<str> for #struct_name #ty_generics #where_clause {
                fn borrow(&self) -> &str {
                    ::mapkey::KeyLike::key_str(&self.#member)
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        #key_like_impl
        #borrow_impl
    })
}

/// Struct to parse the key_like attribute arguments
#[derive(Default)]
struct KeyLikeArgs {
    borrow: bool,
}

impl Parse for KeyLikeArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        // Expect a comma separated list of flags, e.g. "borrow"
        let mut args = KeyLikeArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            if ident == "borrow" {
                args.borrow = true;
            } else {
                return Err(syn::Error::new(ident.span(), "Unknown attribute key"));
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}
