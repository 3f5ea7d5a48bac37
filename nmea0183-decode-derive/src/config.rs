use proc_macro2::{Span, TokenStream};
use syn::{Error, Ident, Result};

use crate::meta::{MetaAttribute, MetaAttributeType};

#[derive(Clone)]
pub struct Config {
    pub sentence_name: Ident,
    pub fields_name: Ident,
    pub sentence_type: TokenStream,
}

impl Config {
    pub fn from_meta_attributes(name: &Ident, attribute_list: &[MetaAttribute]) -> Result<Self> {
        let mut sentence_type = None;

        for meta in attribute_list {
            if meta.r#type == MetaAttributeType::SentenceType {
                sentence_type = Some(meta.arg()?.clone());
            }
        }

        let sentence_type = sentence_type.ok_or_else(|| {
            Error::new(
                name.span(),
                "nmea0183-decode-derive: Missing `#[nmea(sentence_type(\"...\"))]` attribute",
            )
        })?;

        Ok(Self {
            sentence_name: Ident::new("nmea_sentence", Span::call_site()),
            fields_name: Ident::new("nmea_fields", Span::call_site()),
            sentence_type,
        })
    }
}
