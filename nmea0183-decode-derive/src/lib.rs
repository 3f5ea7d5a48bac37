//! # A Rust procedural macro for NMEA 0183 sentence decoders
//!
//! `nmea0183-decode-derive` derives the positional field decoder of a sentence
//! struct for [`nmea0183-decode`]: every named field is decoded, in declaration
//! order, from the next field(s) of a `RawSentence` through its `DecodeField`
//! implementation.
//!
//! [`nmea0183-decode`]: https://crates.io/crates/nmea0183-decode

use generate::generate_decode_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod decoder;
mod generate;
mod meta;

/// Derives `nmea0183_decode::Decode` and `nmea0183_decode::Sentence` for a struct.
///
/// # Attributes
///
/// On the struct:
///
/// - `sentence_type("TAG")` (required): the type tag the decoder accepts.
///
/// On a field:
///
/// - `raw`: the field receives the decoded `RawSentence`. Exactly one field must
///   carry it.
/// - `decoder(path)`: decode with a `fn(&mut Fields<'_>) -> Result<T>` instead of
///   the `DecodeField` implementation of the field type.
/// - `parse_as(Type)`: decode as another type, usually followed by `map`.
/// - `map(expr)`: map the decoded value; may be given several times.
///
/// A sentence with fields left over once every struct field is decoded is
/// rejected.
///
/// # Example
///
/// ```rust,ignore
/// use nmea0183_decode::{Decode, RawSentence};
///
/// #[derive(Decode)]
/// #[nmea(sentence_type("GPXTE"))]
/// pub struct XTE {
///     pub status: char,
///     pub cycle_lock: char,
///     #[nmea(map(|value: Option<f32>| value.map(f64::from)))]
///     #[nmea(parse_as(Option<f32>))]
///     pub cross_track_error: Option<f64>,
///     pub steer: Option<char>,
///     pub units: Option<char>,
///     #[nmea(raw)]
///     pub sentence: RawSentence,
/// }
/// ```
#[proc_macro_derive(Decode, attributes(nmea))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_decode_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
