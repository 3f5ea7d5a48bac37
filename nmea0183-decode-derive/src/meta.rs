use std::{collections::HashSet, fmt::Display};

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, Lit, LitStr, Result, Token, Type, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MetaAttributeType {
    Decoder,
    Map,
    ParseAs,
    Raw,
    SentenceType,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "decoder" => Some(Self::Decoder),
            "map" => Some(Self::Map),
            "parse_as" => Some(Self::ParseAs),
            "raw" => Some(Self::Raw),
            "sentence_type" => Some(Self::SentenceType),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        !matches!(self, Self::Raw)
    }

    fn allowed_multiple(&self) -> bool {
        matches!(self, Self::Map)
    }

    fn is_top_level(&self) -> bool {
        matches!(self, Self::SentenceType)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Decoder => "decoder",
            Self::Map => "map",
            Self::ParseAs => "parse_as",
            Self::Raw => "raw",
            Self::SentenceType => "sentence_type",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    /// The argument of the attribute; every type except `raw` has one.
    pub fn arg(&self) -> Result<&TokenStream> {
        self.arg.as_ref().ok_or_else(|| {
            Error::new(
                self.span,
                format!("nmea0183-decode-derive: Attribute `{}` takes an argument", self.r#type),
            )
        })
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea0183-decode-derive: Unknown nmea attribute")
        })?;

        let arg = if r#type.takes_argument() {
            // read (value) or ="value"
            let token_stream = match r#type {
                MetaAttributeType::SentenceType => parse_literal(input)?,
                MetaAttributeType::ParseAs => parse_argument::<Type>(input)?,
                _ => parse_argument::<Expr>(input)?,
            };
            Some(token_stream)
        } else {
            None
        };

        Ok(MetaAttribute {
            r#type,
            arg,
            span: ident.span(),
        })
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value = Lit::parse(input)?;

        match value {
            Lit::Str(string) => {
                let parsed: P = string.parse()?;
                Ok(quote! { #parsed })
            }
            _ => Err(Error::new(
                value.span(),
                "nmea0183-decode-derive: Unexpected type for nmea attribute content",
            )),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-decode-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

/// Reads a string literal given as `= "value"` or `("value")`.
fn parse_literal(input: ParseStream) -> Result<TokenStream> {
    let literal: LitStr = if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        input.parse()?
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        content.parse()?
    } else {
        return Err(Error::new(
            input.span(),
            "nmea0183-decode-derive: Expected '= \"<value>\"' or '(\"<value>\")' for nmea attribute",
        ));
    };

    if literal.value().is_empty() {
        return Err(Error::new(
            literal.span(),
            "nmea0183-decode-derive: Sentence type must not be empty",
        ));
    }

    Ok(quote! { #literal })
}

fn parse_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .collect())
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = HashSet::new();

    parse_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !meta_attr.r#type.is_top_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decode-derive: Attribute `{}` is not allowed at the top level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decode-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = HashSet::new();

    let attributes = parse_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if meta_attr.r#type.is_top_level() {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decode-derive: Attribute `{}` is not allowed at the field level",
                        meta_attr.r#type
                    ),
                ));
            }

            if !meta_attr.r#type.allowed_multiple() && !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decode-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect::<Result<Vec<_>>>()?;

    // `raw` stands alone, and only one of `parse_as` or `decoder` can be used.
    if let Some(raw) = attributes
        .iter()
        .find(|attr| attr.r#type == MetaAttributeType::Raw)
    {
        if attributes.len() > 1 {
            return Err(Error::new(
                raw.span(),
                "nmea0183-decode-derive: Attribute `raw` cannot be combined with other attributes",
            ));
        }
    }

    if attributes_set.contains(&MetaAttributeType::ParseAs)
        && attributes_set.contains(&MetaAttributeType::Decoder)
    {
        let span = attributes
            .iter()
            .find(|attr| attr.r#type == MetaAttributeType::ParseAs)
            .map_or_else(Span::call_site, MetaAttribute::span);

        return Err(Error::new(
            span,
            "nmea0183-decode-derive: Attribute `parse_as` cannot be used with `decoder` attribute.",
        ));
    }

    Ok(attributes)
}
