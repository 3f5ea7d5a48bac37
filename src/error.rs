//! # Error Types
//!
//! This module defines the error types used throughout the NMEA decoding library.
//!
//! Every failure is returned as a value; nothing here is fatal to the caller, which
//! decides per line whether to skip it, abort the stream or report it.

/// Alias for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all possible errors that can occur while decoding an NMEA sentence.
///
/// The variants follow the decoding pipeline: framing problems first, then the
/// checksum, then dispatch, and finally the per-field decoding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The line violates the basic sentence structure.
    #[error("malformed sentence: {0}")]
    MalformedSentence(Malformed),

    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the checksum carried by the sentence and the one
    /// recomputed from its body, as two uppercase hex digits.
    #[error("checksum mismatch: sentence carries {expected}, body computes to {computed}")]
    ChecksumMismatch {
        /// The checksum found after the `*` separator (uppercased)
        expected: String,
        /// The checksum calculated from the sentence body
        computed: String,
    },

    /// The sentence is well formed but its type tag is not in the registry.
    ///
    /// This is not a hard failure; callers usually skip such lines.
    #[error("unsupported sentence type `{0}`")]
    UnsupportedSentenceType(String),

    /// The type tag belongs to a multiplexed family, but no decoder is
    /// registered for the message id carried in its first field.
    #[error("unsupported {type_tag} message id {id}")]
    UnsupportedVariant {
        /// The type tag of the family (e.g. `PUBX`)
        type_tag: String,
        /// The parsed message id
        id: u8,
    },

    /// A field could not be decoded as its expected type or shape.
    ///
    /// `position` is the zero-based index into [`RawSentence::fields`];
    /// `token` is `None` when the sentence ended before that position.
    ///
    /// [`RawSentence::fields`]: crate::RawSentence::fields
    #[error(
        "{type_tag}: invalid field {position} ({})",
        .token.as_deref().map_or("missing".to_owned(), |token| format!("`{token}`"))
    )]
    FieldDecode {
        /// The type tag of the sentence being decoded
        type_tag: String,
        /// Zero-based index of the offending field
        position: usize,
        /// The raw token, if the field was present at all
        token: Option<String>,
    },

    /// A sentence decoder was handed a sentence of another type.
    ///
    /// Dispatch never produces this; it guards decoders called directly.
    #[error("{expected} decoder received a {found} sentence")]
    TypeMismatch {
        /// The type tag the decoder handles
        expected: &'static str,
        /// The type tag of the sentence it was given
        found: String,
    },
}

/// Structural problems detected before any field is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// NMEA sentences are ASCII-only.
    #[error("input contains non-ASCII characters")]
    NonAscii,

    /// No `$` start marker was found.
    #[error("missing `$` start marker")]
    MissingStart,

    /// The line must contain exactly one `*` checksum separator.
    #[error("expected a single `*` checksum separator, found {0}")]
    ChecksumSeparators(usize),

    /// The `*` checksum separator comes before the `$` start marker.
    #[error("checksum separator precedes the start marker")]
    ChecksumBeforeStart,
}

impl From<Malformed> for Error {
    fn from(malformed: Malformed) -> Self {
        Error::MalformedSentence(malformed)
    }
}
