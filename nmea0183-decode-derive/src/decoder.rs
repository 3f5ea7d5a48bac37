use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, Type};

/// How the value of one struct field is obtained from the field cursor.
#[derive(Clone)]
pub enum Decoder {
    /// A user-supplied `fn(&mut Fields) -> Result<T>`.
    Custom {
        decoder: TokenStream,
        fields: Ident,
    },
    Map {
        decoder: Box<Decoder>,
        map: TokenStream,
    },
    /// The `DecodeField` implementation of a type.
    Type { ty: Box<Type>, fields: Ident },
}

impl ToTokens for Decoder {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let token_stream = match self {
            Self::Custom { decoder, fields } => {
                quote! { (#decoder)(&mut #fields) }
            }
            Self::Map { decoder, map } => {
                quote! { #decoder.map(#map) }
            }
            Self::Type { ty, fields } => {
                quote! { <#ty as nmea0183_decode::DecodeField>::decode_field(&mut #fields) }
            }
        };

        tokens.extend(token_stream);
    }
}
