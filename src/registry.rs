//! # Sentence Registry
//!
//! The fixed mapping from type tag to decoder. Dispatch is a lookup in a static
//! table rather than a chain of comparisons, so the set of supported sentences
//! can be enumerated and tested on its own.
//!
//! Most tags map straight to one decoder. A multiplexed family such as `PUBX`
//! carries a message id in its first field, and maps to a second table keyed by
//! that id.

use nom::character::complete::u8;

use crate::{
    Decode, Error, Fields, NmeaSentence, RawSentence, Result,
    sentences::{GGA, GLL, GSA, PGRME, PUBX00, RMC},
};

/// Decodes a tokenized sentence into its typed record.
pub type DecodeFn = fn(RawSentence) -> Result<NmeaSentence>;

/// What a type tag is registered as.
#[derive(Debug, Clone, Copy)]
pub enum Entry {
    /// The tag has a single layout.
    Sentence(DecodeFn),
    /// The layout is selected by the message id in the first field.
    Multiplexed(&'static [(u8, DecodeFn)]),
}

static PUBX: &[(u8, DecodeFn)] = &[(0, decode_as::<PUBX00>)];

static REGISTRY: &[(&str, Entry)] = &[
    ("GPRMC", Entry::Sentence(decode_as::<RMC>)),
    ("GPGGA", Entry::Sentence(decode_as::<GGA>)),
    ("GPGSA", Entry::Sentence(decode_as::<GSA>)),
    ("GPGLL", Entry::Sentence(decode_as::<GLL>)),
    ("PGRME", Entry::Sentence(decode_as::<PGRME>)),
    ("PUBX", Entry::Multiplexed(PUBX)),
];

fn decode_as<T>(sentence: RawSentence) -> Result<NmeaSentence>
where
    T: Decode + Into<NmeaSentence>,
{
    T::decode(sentence).map(Into::into)
}

/// Returns the registry entry of `type_tag`, if it is supported.
pub fn lookup(type_tag: &str) -> Option<Entry> {
    REGISTRY
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|(_, entry)| *entry)
}

/// The type tags the registry knows, in registration order.
///
/// # Examples
///
/// ```rust
/// let types: Vec<_> = nmea0183_decode::supported_types().collect();
/// assert_eq!(types, ["GPRMC", "GPGGA", "GPGSA", "GPGLL", "PGRME", "PUBX"]);
/// ```
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(tag, _)| *tag)
}

/// Selects the decoder of `sentence` by its type tag and runs it.
///
/// # Errors
///
/// - [`Error::UnsupportedSentenceType`] if the tag is not registered.
/// - [`Error::FieldDecode`] at position 0 if a multiplexed sentence has no
///   numeric message id.
/// - [`Error::UnsupportedVariant`] if no decoder is registered for that id.
/// - Any error of the selected decoder.
pub fn dispatch(sentence: RawSentence) -> Result<NmeaSentence> {
    let entry = lookup(sentence.type_tag())
        .ok_or_else(|| Error::UnsupportedSentenceType(sentence.type_tag().to_owned()))?;

    let decode = match entry {
        Entry::Sentence(decode) => decode,
        Entry::Multiplexed(variants) => {
            let id = Fields::new(&sentence).required(u8)?;

            variants
                .iter()
                .find(|(variant, _)| *variant == id)
                .map(|(_, decode)| *decode)
                .ok_or_else(|| Error::UnsupportedVariant {
                    type_tag: sentence.type_tag().to_owned(),
                    id,
                })?
        }
    };

    decode(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentence;

    fn dispatch_line(line: &str) -> Result<NmeaSentence> {
        dispatch(RawSentence::parse(line)?)
    }

    #[test]
    fn test_dispatch_supported() {
        let cases = [
            "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62",
            "$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76",
            "$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A",
            "$GPGLL,4916.45,N,12311.12,W,225444,A*31",
            "$PGRME,15.0,M,45.0,M,25.0,M*1C",
            "$PUBX,00,081350.00,4717.113210,N,00833.915187,E,546.589,G3,2.1,2.0,0.007,77.52*53",
        ];

        for (line, tag) in cases.iter().zip(supported_types()) {
            let sentence = dispatch_line(line).unwrap();
            assert_eq!(sentence.type_tag(), tag);
            assert_eq!(sentence.raw_sentence().raw(), *line);
        }

        assert!(matches!(dispatch_line(cases[0]), Ok(NmeaSentence::RMC(_))));
        assert!(matches!(dispatch_line(cases[1]), Ok(NmeaSentence::GGA(_))));
        assert!(matches!(dispatch_line(cases[2]), Ok(NmeaSentence::GSA(_))));
        assert!(matches!(dispatch_line(cases[3]), Ok(NmeaSentence::GLL(_))));
        assert!(matches!(dispatch_line(cases[4]), Ok(NmeaSentence::PGRME(_))));
        assert!(matches!(dispatch_line(cases[5]), Ok(NmeaSentence::PUBX00(_))));
    }

    #[test]
    fn test_unsupported_sentence_type() {
        assert_eq!(
            dispatch_line("$XXYYY,1,2,3*45"),
            Err(Error::UnsupportedSentenceType("XXYYY".to_owned()))
        );

        // tags are matched exactly
        assert!(lookup("GPRM").is_none());
        assert!(lookup("gprmc").is_none());
        assert!(lookup("GNRMC").is_none());
    }

    #[test]
    fn test_unsupported_variant() {
        assert_eq!(
            dispatch_line("$PUBX,9,1,2*09"),
            Err(Error::UnsupportedVariant {
                type_tag: "PUBX".to_owned(),
                id: 9,
            })
        );

        assert_eq!(
            dispatch_line("$PUBX,03,11,23,-,,,45,010,29,-,,,46,013*16"),
            Err(Error::UnsupportedVariant {
                type_tag: "PUBX".to_owned(),
                id: 3,
            })
        );
    }

    #[test]
    fn test_invalid_message_id() {
        assert_eq!(
            dispatch_line("$PUBX,abc,1*4E"),
            Err(Error::FieldDecode {
                type_tag: "PUBX".to_owned(),
                position: 0,
                token: Some("abc".to_owned()),
            })
        );

        assert_eq!(
            dispatch_line("$PUBX*1F"),
            Err(Error::FieldDecode {
                type_tag: "PUBX".to_owned(),
                position: 0,
                token: None,
            })
        );
    }

    #[test]
    fn test_lookup() {
        assert!(matches!(lookup("GPGGA"), Some(Entry::Sentence(_))));
        assert!(matches!(
            lookup("PUBX"),
            Some(Entry::Multiplexed(variants)) if variants.len() == 1
        ));
        assert_eq!(supported_types().count(), REGISTRY.len());
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

        assert_eq!(dispatch_line(line), dispatch_line(line));
    }
}
