//! # Field Cursor
//!
//! This module provides [`Fields`], the positional reader every sentence decoder
//! consumes a [`RawSentence`] with. Each token is handed to a nom parser that must
//! consume it completely; any failure is reported as [`Error::FieldDecode`] with the
//! type tag, the zero-based field position and the offending token.

use nom::{Parser, combinator::all_consuming};

use crate::{Error, RawSentence, Result};

/// Error type of the nom parsers applied to single tokens.
pub type TokenError<'a> = nom::error::Error<&'a str>;

/// A cursor over the fields of a [`RawSentence`].
///
/// Fields are read strictly in order. Reading past the last field is an error for
/// required and optional values alike; only [`Fields::trailing`] treats the end of
/// the sentence as an absent value.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::{Error, Fields, RawSentence};
/// use nom::number::complete::float;
///
/// let sentence = RawSentence::parse("$PGRME,15.0,M,,M,x,M*62").unwrap();
/// let mut fields = Fields::new(&sentence);
///
/// assert_eq!(fields.required(float), Ok(15.0));
/// fields.skip(1);
/// assert_eq!(fields.optional(float), Ok(None));
/// fields.skip(1);
/// assert_eq!(
///     fields.optional(float),
///     Err(Error::FieldDecode {
///         type_tag: "PGRME".to_owned(),
///         position: 4,
///         token: Some("x".to_owned()),
///     })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    sentence: &'a RawSentence,
    position: usize,
}

impl<'a> Fields<'a> {
    /// Creates a cursor positioned on the first field of `sentence`.
    pub fn new(sentence: &'a RawSentence) -> Self {
        Self {
            sentence,
            position: 0,
        }
    }

    /// The type tag of the sentence being read.
    pub fn type_tag(&self) -> &'a str {
        self.sentence.type_tag()
    }

    /// Zero-based position of the next field to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every field has been read.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.sentence.fields().len()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.sentence.fields().get(self.position).map(String::as_str)
    }

    /// Consumes the next token, failing if the sentence has no more fields.
    pub fn next_token(&mut self) -> Result<(usize, &'a str)> {
        let position = self.position;
        let token = self.peek().ok_or_else(|| self.error(position, None))?;
        self.position += 1;

        Ok((position, token))
    }

    /// Skips up to `count` fields.
    pub fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.sentence.fields().len());
    }

    /// Decodes the next token with `parser`, which must consume all of it.
    ///
    /// An empty token is handed to the parser like any other, so it usually fails.
    pub fn required<O, P>(&mut self, parser: P) -> Result<O>
    where
        P: Parser<&'a str, Output = O, Error = TokenError<'a>>,
    {
        let (position, token) = self.next_token()?;
        self.token(position, token, parser)
    }

    /// Decodes the next token with `parser`, mapping an empty token to `None`.
    pub fn optional<O, P>(&mut self, parser: P) -> Result<Option<O>>
    where
        P: Parser<&'a str, Output = O, Error = TokenError<'a>>,
    {
        let (position, token) = self.next_token()?;
        if token.is_empty() {
            return Ok(None);
        }

        self.token(position, token, parser).map(Some)
    }

    /// Like [`Fields::optional`], but the end of the sentence also yields `None`.
    ///
    /// Used for fields later protocol revisions appended to a sentence.
    pub fn trailing<O, P>(&mut self, parser: P) -> Result<Option<O>>
    where
        P: Parser<&'a str, Output = O, Error = TokenError<'a>>,
    {
        if self.is_exhausted() {
            return Ok(None);
        }

        self.optional(parser)
    }

    /// Fails on the first field left unread.
    ///
    /// Called once a sentence layout is fully decoded, so that surplus fields are
    /// reported instead of silently dropped.
    pub fn finish(&self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error(self.position, Some(token))),
        }
    }

    /// Builds the [`Error::FieldDecode`] for the field at `position`.
    pub fn error(&self, position: usize, token: Option<&str>) -> Error {
        Error::FieldDecode {
            type_tag: self.type_tag().to_owned(),
            position,
            token: token.map(str::to_owned),
        }
    }

    /// Builds the [`Error::FieldDecode`] for the field read last.
    pub fn error_at_previous(&self) -> Error {
        let position = self.position.saturating_sub(1);
        self.error(position, self.sentence.fields().get(position).map(String::as_str))
    }

    /// Decodes a token taken with [`Fields::next_token`] with `parser`, which must
    /// consume all of it.
    pub fn token<O, P>(&self, position: usize, token: &'a str, parser: P) -> Result<O>
    where
        P: Parser<&'a str, Output = O, Error = TokenError<'a>>,
    {
        all_consuming(parser)
            .parse(token)
            .map(|(_, value)| value)
            .map_err(|_| self.error(position, Some(token)))
    }
}
