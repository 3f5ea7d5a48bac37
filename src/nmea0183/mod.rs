//! # NMEA 0183 Sentence Tokenizer
//!
//! This module turns one line of text into a [`RawSentence`]: it locates the `$`
//! start marker and the single `*` checksum separator, splits the body into the
//! type tag and its fields, and verifies the XOR checksum.
//!
//! The line is expected in the standard NMEA 0183 shape: `$TAG,D1,D2,...,Dn*CC`.

use nom::{
    IResult, Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::rest,
    sequence::{preceded, terminated},
};

use crate::{Error, Malformed, NmeaSentence, Result, Sentence, registry};

/// The token that starts a sentence.
const SENTENCE_START: char = '$';
/// The token that separates fields.
const FIELD_SEPARATOR: char = ',';
/// The token that separates the body from the checksum.
const CHECKSUM_SEPARATOR: char = '*';

/// A tokenized, checksum-verified NMEA sentence.
///
/// This is the generic representation every typed sentence is decoded from. The
/// fields are kept exactly as they appear in the line, in order; empty fields are
/// kept as empty strings so that positions never shift.
///
/// A `RawSentence` can only be obtained through [`RawSentence::parse`] (or a
/// [`SentenceParser`]), so holding one means its checksum matched.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::RawSentence;
///
/// let sentence = RawSentence::parse("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
/// assert_eq!(sentence.type_tag(), "GPGLL");
/// assert_eq!(sentence.fields(), ["4916.45", "N", "12311.12", "W", "225444", "A"]);
/// assert_eq!(sentence.checksum(), "31");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawSentence {
    type_tag: String,
    fields: Vec<String>,
    checksum: String,
    raw: String,
}

impl RawSentence {
    /// Tokenizes `line` and verifies its checksum.
    ///
    /// The line is used verbatim; use a [`SentenceParser`] configured with
    /// [`LineEndingMode::Strip`] to accept lines that still carry their terminator.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedSentence`] if the line is not ASCII, has no `$`, or does
    ///   not contain exactly one `*` after the `$`.
    /// - [`Error::ChecksumMismatch`] if the checksum text differs from the XOR of
    ///   the body.
    pub fn parse(line: &str) -> Result<Self> {
        if !line.is_ascii() {
            return Err(Malformed::NonAscii.into());
        }

        let separators = line.matches(CHECKSUM_SEPARATOR).count();
        if separators != 1 {
            return Err(Malformed::ChecksumSeparators(separators).into());
        }

        if !line.contains(SENTENCE_START) {
            return Err(Malformed::MissingStart.into());
        }

        let (_, (body, found)) =
            frame(line).map_err(|_| Error::from(Malformed::ChecksumBeforeStart))?;

        let computed = format!("{:02X}", checksum(body));
        let checksum = found.to_ascii_uppercase();
        if computed != checksum {
            return Err(Error::ChecksumMismatch {
                expected: checksum,
                computed,
            });
        }

        let mut tokens = body.split(FIELD_SEPARATOR).map(str::to_owned);
        // `split` always yields at least one item
        let type_tag = tokens.next().unwrap_or_default();

        Ok(Self {
            type_tag,
            fields: tokens.collect(),
            checksum,
            raw: line.to_owned(),
        })
    }

    /// The sentence identifier, e.g. `GPRMC` or `PUBX`.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The fields following the type tag, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The checksum carried by the sentence, as two uppercase hex digits.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The line this sentence was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns [`Error::TypeMismatch`] unless this sentence has the given type tag.
    pub fn expect_type(&self, expected: &'static str) -> Result<()> {
        if self.type_tag == expected {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected,
                found: self.type_tag.clone(),
            })
        }
    }
}

impl Sentence for RawSentence {
    fn raw_sentence(&self) -> &RawSentence {
        self
    }
}

/// Defines what the parser does with a line terminator left on the input.
///
/// Framing lines out of a byte stream is the transport's job, so by default the
/// parser takes the line exactly as given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    #[default]
    /// The line is used verbatim.
    ///
    /// A trailing `\r\n` becomes part of the checksum text after `*`, so such a
    /// line fails with [`Error::ChecksumMismatch`].
    Verbatim,

    /// A single trailing `\r\n` or `\n` is removed before tokenizing.
    ///
    /// Use this mode when feeding lines straight from a log file or a reader that
    /// keeps terminators.
    Strip,
}

/// Configures a [`SentenceParser`].
///
/// It uses the builder pattern so that new options can be added without breaking
/// callers.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::{LineEndingMode, NmeaSentence, SentenceParserBuilder};
///
/// let parser = SentenceParserBuilder::new()
///     .line_ending_mode(LineEndingMode::Strip)
///     .build();
///
/// let sentence = parser.parse("$PGRME,15.0,M,45.0,M,25.0,M*1C\r\n").unwrap();
/// assert!(matches!(sentence, NmeaSentence::PGRME(_)));
///
/// let strict = SentenceParserBuilder::new().build();
/// assert!(strict.parse("$PGRME,15.0,M,45.0,M,25.0,M*1C\r\n").is_err());
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceParserBuilder {
    line_ending_mode: LineEndingMode,
}

impl SentenceParserBuilder {
    /// Creates a builder with the default settings:
    /// - Line ending mode: [`LineEndingMode::Verbatim`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Builds the parser with the configured settings.
    pub fn build(self) -> SentenceParser {
        SentenceParser {
            line_ending_mode: self.line_ending_mode,
        }
    }
}

/// The full decoding pipeline: tokenize, verify the checksum, dispatch, decode.
///
/// A parser holds only its configuration, so it is `Copy` and can be shared freely
/// between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceParser {
    line_ending_mode: LineEndingMode,
}

impl SentenceParser {
    /// Tokenizes `line` into a [`RawSentence`] without dispatching it.
    pub fn tokenize(&self, line: &str) -> Result<RawSentence> {
        RawSentence::parse(self.trim(line))
    }

    /// Decodes `line` into its typed sentence.
    ///
    /// # Errors
    ///
    /// Returns the first error met by any stage; see [`Error`].
    pub fn parse(&self, line: &str) -> Result<NmeaSentence> {
        registry::dispatch(self.tokenize(line)?)
    }

    fn trim<'a>(&self, line: &'a str) -> &'a str {
        match self.line_ending_mode {
            LineEndingMode::Verbatim => line,
            LineEndingMode::Strip => line
                .strip_suffix("\r\n")
                .or_else(|| line.strip_suffix('\n'))
                .unwrap_or(line),
        }
    }
}

/// Splits a line into the sentence body and the checksum text.
///
/// Anything before the `$` start marker is skipped. The body is everything between
/// the `$` and the `*`; the checksum text is everything after the `*`.
fn frame(i: &str) -> IResult<&str, (&str, &str)> {
    let (i, _) = take_till(|c: char| c == SENTENCE_START).parse(i)?;
    let (i, body) = preceded(
        char(SENTENCE_START),
        terminated(
            take_till(|c: char| c == CHECKSUM_SEPARATOR),
            char(CHECKSUM_SEPARATOR),
        ),
    )
    .parse(i)?;
    let (i, checksum) = rest.parse(i)?;

    Ok((i, (body, checksum)))
}

/// Calculates the NMEA 0183 checksum of a sentence body.
///
/// The checksum is the XOR of every byte between the `$` start marker and the `*`
/// separator, both excluded.
pub(crate) fn checksum(body: &str) -> u8 {
    body.bytes()
        .fold(0u8, |accumulated_xor, byte| accumulated_xor ^ byte)
}

#[cfg(test)]
mod tests {
    mod checksum;
    mod line_ending;
}
