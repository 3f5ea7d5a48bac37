use nom::{
    IResult, Parser,
    bytes::complete::take,
    character::complete::{anychar, char, digit1},
    combinator::{all_consuming, opt, verify},
    error::{ErrorKind, make_error},
    sequence::preceded,
};

use crate::{Fields, Result};

/// Trait for types that can be decoded from the fields of a sentence.
///
/// The `DecodeField` trait is the positional counterpart of a sentence layout: each
/// implementation consumes the number of fields its value spans from a [`Fields`]
/// cursor and returns the decoded value, or the [`FieldDecode`] error of the first
/// field that failed.
///
/// Implementations are provided for integers, floats, `char`, [`time::Time`]
/// (`hhmmss[.sss]`) and [`time::Date`] (`ddmmyy`), each consuming one field, and for
/// `Option` of each of those, which maps an empty field to `None`. The status and
/// mode enumerations of [`crate::sentences`] implement it as well.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::{DecodeField, Fields, RawSentence};
///
/// let sentence = RawSentence::parse("$XXYYY,1,2,3*45").unwrap();
/// let mut fields = Fields::new(&sentence);
///
/// assert_eq!(u8::decode_field(&mut fields), Ok(1));
/// assert_eq!(<Option<f32>>::decode_field(&mut fields), Ok(Some(2.0)));
/// assert_eq!(char::decode_field(&mut fields), Ok('3'));
/// assert!(u8::decode_field(&mut fields).is_err());
/// ```
///
/// # Implementing for Custom Types
///
/// A type spanning several fields composes the implementations of its parts:
///
/// ```rust
/// use nmea0183_decode::{DecodeField, Fields, Result};
///
/// struct Dop {
///     horizontal: f32,
///     vertical: Option<f32>,
/// }
///
/// impl DecodeField for Dop {
///     fn decode_field(fields: &mut Fields<'_>) -> Result<Self> {
///         let horizontal = f32::decode_field(fields)?;
///         let vertical = <Option<f32>>::decode_field(fields)?;
///
///         Ok(Dop { horizontal, vertical })
///     }
/// }
/// ```
///
/// [`FieldDecode`]: crate::Error::FieldDecode
pub trait DecodeField: Sized {
    /// Decodes `Self` from the next field(s) of `fields`.
    fn decode_field(fields: &mut Fields<'_>) -> Result<Self>;
}

macro_rules! impl_decode_field {
    ($($t:ty => $parser:expr),* $(,)?) => ($(
        impl DecodeField for $t {
            fn decode_field(fields: &mut Fields<'_>) -> Result<Self> {
                fields.required($parser)
            }
        }

        impl DecodeField for Option<$t> {
            fn decode_field(fields: &mut Fields<'_>) -> Result<Self> {
                fields.optional($parser)
            }
        }
    )*)
}

impl_decode_field!(
    u8 => nom::character::complete::u8,
    u16 => nom::character::complete::u16,
    u32 => nom::character::complete::u32,
    i8 => nom::character::complete::i8,
    i16 => nom::character::complete::i16,
    i32 => nom::character::complete::i32,
    f32 => float,
    f64 => double,
    char => anychar,
    time::Time => time,
    time::Date => date,
);

/// Declares an enumeration decoded from a fixed set of single-field tokens.
///
/// Every variant is bound to the exact token that represents it; the generated
/// `parse` function is a nom parser over those tokens, and the enumeration and its
/// `Option` implement [`DecodeField`].
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $token:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Parses the token of one of the variants.
            pub fn parse(i: &str) -> nom::IResult<&str, Self> {
                use nom::Parser;

                nom::branch::alt(($(
                    nom::combinator::value(Self::$variant, nom::bytes::complete::tag($token)),
                )*))
                .parse(i)
            }

            /// The token this variant is transmitted as.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }
        }

        impl $crate::DecodeField for $name {
            fn decode_field(fields: &mut $crate::Fields<'_>) -> $crate::Result<Self> {
                fields.required(Self::parse)
            }
        }

        impl $crate::DecodeField for Option<$name> {
            fn decode_field(fields: &mut $crate::Fields<'_>) -> $crate::Result<Self> {
                fields.optional(<$name>::parse)
            }
        }
    };
}

pub(crate) use field_enum;

/// Parses a finite decimal number.
///
/// nom's `float` also reads `nan`, `inf` and `infinity`, which are not numbers an
/// NMEA field can carry.
pub fn float(i: &str) -> IResult<&str, f32> {
    verify(nom::number::complete::float, |value: &f32| value.is_finite()).parse(i)
}

/// Parses a finite decimal number, like [`float`] at double precision.
pub fn double(i: &str) -> IResult<&str, f64> {
    verify(nom::number::complete::double, |value: &f64| value.is_finite()).parse(i)
}

/// Parses exactly two decimal digits.
fn two_digits(i: &str) -> IResult<&str, u8> {
    take(2u8)
        .and_then(all_consuming(nom::character::complete::u8))
        .parse(i)
}

/// Parses a UTC time of day in the `hhmmss[.sss]` format.
///
/// Fractional seconds are truncated to millisecond precision.
pub fn time(i: &str) -> IResult<&str, time::Time> {
    let input = i;
    let (i, (hour, minute, second)) = (two_digits, two_digits, two_digits).parse(i)?;
    let (i, fraction) = opt(preceded(char('.'), digit1)).parse(i)?;

    let milliseconds = fraction.map_or(0, |digits: &str| {
        digits
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(3)
            .fold(0u16, |milliseconds, digit| milliseconds * 10 + u16::from(digit - b'0'))
    });

    let time = time::Time::from_hms_milli(hour, minute, second, milliseconds)
        .or(Err(nom::Err::Error(make_error(input, ErrorKind::Verify))))?;

    Ok((i, time))
}

/// Parses a date in the `ddmmyy` format.
///
/// Two-digit years from 83 onward are taken as 19xx (GPS week zero starts in
/// 1980, and NMEA 0183 was first published in 1983), anything below as 20xx.
pub fn date(i: &str) -> IResult<&str, time::Date> {
    let input = i;
    let (i, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

    let month = time::Month::try_from(month)
        .or(Err(nom::Err::Error(make_error(input, ErrorKind::Verify))))?;

    let year = match year {
        83..=99 => 1900 + year as i32,
        _ => 2000 + year as i32,
    };

    let date = time::Date::from_calendar_date(year, month, day)
        .or(Err(nom::Err::Error(make_error(input, ErrorKind::Verify))))?;

    Ok((i, date))
}
