use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Error, Fields, Generics, Ident, Result, Type, parse2};

use crate::{
    config::Config,
    decoder::Decoder,
    meta::{self, MetaAttribute, MetaAttributeType},
};

// Usage:
// #[derive(Decode)]
// #[nmea(sentence_type("GPXXX"))]
// pub struct XXX {
//     pub value: Option<f32>,
//     #[nmea(decoder(custom_decoder))]
//     pub pair: Option<(f32, char)>,
//     #[nmea(raw)]
//     pub sentence: RawSentence,
// }

struct FieldDecoder {
    variable_name: Ident,
    ty: Type,
    decoder: Decoder,
}

struct Struct {
    name: Ident,
    config: Config,
    generics: Generics,
    raw_field: Ident,
    decoders: Vec<FieldDecoder>,
}

impl Struct {
    fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        attributes: &[syn::Attribute],
        generics: &Generics,
    ) -> Result<Self> {
        let attributes = meta::parse_top_level_attributes(attributes)?;
        let config = Config::from_meta_attributes(name, &attributes)?;

        let Fields::Named(named) = &datastruct.fields else {
            return Err(Error::new(
                name.span(),
                "nmea0183-decode-derive: Only structs with named fields are supported",
            ));
        };

        let mut raw_field = None;
        let mut decoders = vec![];
        for field in &named.named {
            let Some(variable_name) = field.ident.clone() else {
                continue;
            };
            let attributes = meta::parse_field_level_attributes(&field.attrs)?;

            if attributes
                .iter()
                .any(|attr| attr.r#type == MetaAttributeType::Raw)
            {
                if raw_field.is_some() {
                    return Err(Error::new(
                        variable_name.span(),
                        "nmea0183-decode-derive: Only one field can be marked `raw`",
                    ));
                }
                raw_field = Some(variable_name);
                continue;
            }

            let decoder = get_decoder(&field.ty, &attributes, &config)?;
            decoders.push(FieldDecoder {
                variable_name,
                ty: field.ty.clone(),
                decoder,
            });
        }

        let raw_field = raw_field.ok_or_else(|| {
            Error::new(
                name.span(),
                "nmea0183-decode-derive: A field marked `#[nmea(raw)]` must hold the RawSentence",
            )
        })?;

        Ok(Self {
            name: name.clone(),
            config,
            generics: generics.clone(),
            raw_field,
            decoders,
        })
    }

    fn generate_decode_body(&self) -> TokenStream {
        let sentence = &self.config.sentence_name;
        let fields = &self.config.fields_name;
        let raw_field = &self.raw_field;

        let (variable_name, (ty, decoder)): (Vec<_>, (Vec<_>, Vec<_>)) = self
            .decoders
            .iter()
            .map(|field| (&field.variable_name, (&field.ty, &field.decoder)))
            .unzip();

        quote! {
            #sentence.expect_type(<Self as nmea0183_decode::Decode>::SENTENCE_TYPE)?;

            #[allow(unused_mut)]
            let mut #fields = nmea0183_decode::Fields::new(&#sentence);
            #(let #variable_name: #ty = #decoder?;)*
            #fields.finish()?;

            Ok(Self {
                #(#variable_name,)*
                #raw_field: #sentence,
            })
        }
    }

    fn generate_impl(&self) -> TokenStream {
        let name = &self.name;
        let sentence = &self.config.sentence_name;
        let sentence_type = &self.config.sentence_type;
        let raw_field = &self.raw_field;
        let body = self.generate_decode_body();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics nmea0183_decode::Decode for #name #ty_generics #where_clause {
                const SENTENCE_TYPE: &'static str = #sentence_type;

                fn decode(#sentence: nmea0183_decode::RawSentence) -> nmea0183_decode::Result<Self> {
                    #body
                }
            }

            impl #impl_generics nmea0183_decode::Sentence for #name #ty_generics #where_clause {
                fn raw_sentence(&self) -> &nmea0183_decode::RawSentence {
                    &self.#raw_field
                }
            }
        }
    }
}

/// Builds the decoder of a field from its attributes, outermost first.
fn get_decoder(ty: &Type, attributes: &[MetaAttribute], config: &Config) -> Result<Decoder> {
    let mut attributes = attributes;
    while let Some((attribute, rest)) = attributes.split_first() {
        match attribute.r#type {
            MetaAttributeType::Decoder => {
                return Ok(Decoder::Custom {
                    decoder: attribute.arg()?.clone(),
                    fields: config.fields_name.clone(),
                });
            }
            MetaAttributeType::ParseAs => {
                let parse_as_type = parse2::<Type>(attribute.arg()?.clone())?;
                return get_decoder(&parse_as_type, rest, config);
            }
            MetaAttributeType::Map => {
                let decoder = get_decoder(ty, rest, config)?;
                return Ok(Decoder::Map {
                    decoder: Box::new(decoder),
                    map: attribute.arg()?.clone(),
                });
            }
            _ => {}
        }

        attributes = rest;
    }

    Ok(Decoder::Type {
        ty: Box::new(ty.clone()),
        fields: config.fields_name.clone(),
    })
}

pub fn generate_decode_impl(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(datastruct) => {
            let generator =
                Struct::from_datastruct(&input.ident, datastruct, &input.attrs, &input.generics)?;
            Ok(generator.generate_impl())
        }
        Data::Enum(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decode-derive: Enums not supported; sentence families are dispatched by the registry",
        )),
        Data::Union(_) => Err(Error::new(
            input.ident.span(),
            "nmea0183-decode-derive: Unions not supported",
        )),
    }
}
