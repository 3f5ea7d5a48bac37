//! # NMEA 0183 Decoder
//!
//! This library decodes single lines of NMEA 0183 text with the format:
//! `$TAG,D1,D2,...,Dn*CC`
//!
//! Decoding runs as a pipeline:
//! 1. The line is tokenized into a [`RawSentence`] and its XOR checksum verified.
//! 2. The type tag selects a decoder from a static registry; multiplexed
//!    families such as `PUBX` are further selected by their message id.
//! 3. The decoder reads the fields positionally into a typed record, returned as
//!    an [`NmeaSentence`].
//!
//! Every failure is a value of [`Error`]; the library neither logs nor panics on
//! bad input.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_decode::{Error, NmeaSentence, Sentence};
//!
//! let sentence = nmea0183_decode::parse("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
//! if let NmeaSentence::GLL(gll) = &sentence {
//!     let longitude = gll.longitude.unwrap();
//!     assert!((longitude.degrees() - -123.18533).abs() < 1e-5);
//! }
//! assert_eq!(sentence.raw_sentence().checksum(), "31");
//!
//! // unknown sentences are reported, not decoded
//! assert_eq!(
//!     nmea0183_decode::parse("$XXYYY,1,2,3*45"),
//!     Err(Error::UnsupportedSentenceType("XXYYY".to_owned()))
//! );
//! ```
//!
//! ## Custom sentences
//!
//! The typed records are plain structs deriving [`Decode`](macro@Decode); the
//! same derive works for sentences outside the registry, decoded directly from a
//! [`RawSentence`]:
//!
//! ```rust
//! use nmea0183_decode::{Decode, RawSentence};
//!
//! #[derive(Debug, Decode)]
//! #[nmea(sentence_type("XXYYY"))]
//! struct XXYYY {
//!     first: u8,
//!     #[nmea(map(|value: Option<u8>| value.map(|tenths| f32::from(tenths) / 10.0)))]
//!     #[nmea(parse_as(Option<u8>))]
//!     second: Option<f32>,
//!     third: char,
//!     #[nmea(raw)]
//!     sentence: RawSentence,
//! }
//!
//! let raw = RawSentence::parse("$XXYYY,1,2,3*45").unwrap();
//! let decoded = XXYYY::decode(raw).unwrap();
//! assert_eq!(decoded.first, 1);
//! assert_eq!(decoded.second, Some(0.2));
//! assert_eq!(decoded.third, '3');
//! ```

mod coordinate;
pub mod error;
mod nmea0183;
mod parse;
pub mod parsing;
pub mod registry;
pub mod sentences;

pub use coordinate::{Coordinate, CoordinateError, Hemisphere};
pub use error::{Error, Malformed, Result};
pub use nmea0183::*;
pub use nmea0183_decode_derive::Decode;
pub use parse::DecodeField;
pub use parsing::Fields;
pub use registry::supported_types;
pub use sentences::{Decode, NmeaSentence, Sentence};

/// Decodes one line of NMEA 0183 text into its typed sentence.
///
/// The line is taken verbatim, without a line terminator; see
/// [`SentenceParserBuilder`] for other settings.
///
/// # Errors
///
/// Returns the first error met by any stage of the pipeline; see [`Error`].
pub fn parse(line: &str) -> Result<NmeaSentence> {
    SentenceParser::default().parse(line)
}

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenarios() {
        let sentence = parse("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
        let NmeaSentence::GLL(gll) = sentence else {
            panic!("expected a GLL sentence");
        };
        assert!((gll.latitude.unwrap().degrees() - 49.27417).abs() < 1e-5);
        assert!((gll.longitude.unwrap().degrees() - -123.18533).abs() < 1e-5);

        assert_eq!(
            parse("$GPGLL,4916.45,N,12311.12,W,225444,A*32"),
            Err(Error::ChecksumMismatch {
                expected: "32".to_owned(),
                computed: "31".to_owned(),
            })
        );

        assert_eq!(
            parse("$XXYYY,1,2,3*45"),
            Err(Error::UnsupportedSentenceType("XXYYY".to_owned()))
        );

        assert_eq!(
            parse("$PUBX,9,1,2*09"),
            Err(Error::UnsupportedVariant {
                type_tag: "PUBX".to_owned(),
                id: 9,
            })
        );

        assert_eq!(
            parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,X.9,545.4,M,46.9,M,,*2F"),
            Err(Error::FieldDecode {
                type_tag: "GPGGA".to_owned(),
                position: 7,
                token: Some("X.9".to_owned()),
            })
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let lines = [
            "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A*05",
            "$PUBX,00,081350.00,4717.113210,N,00833.915187,E,546.589,G3,2.1,2.0,0.007,77.52,0.007,,0.92,1.19,0.77,9,0,0*5F",
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
            "$GPGGA,123519,4807.038,N,01131.000,E,1,08,NaN,545.4,M,46.9,M,,*01",
        ];

        for line in lines {
            assert_eq!(parse(line), parse(line), "{line}");
        }
    }

    #[test]
    fn test_malformed() {
        let cases = [
            ("GPGLL,4916.45,N,12311.12,W,225444,A*31", Malformed::MissingStart),
            ("$GPGLL,4916.45,N,12311.12,W,225444,A", Malformed::ChecksumSeparators(0)),
            ("$GPGLL,4916.45,N*,12311.12,W,225444,A*31", Malformed::ChecksumSeparators(2)),
        ];

        for (input, expected) in cases {
            assert_eq!(parse(input), Err(Error::MalformedSentence(expected)), "{input}");
        }
    }
}
