//! # Coordinate Decoder
//!
//! NMEA 0183 transmits a latitude or longitude as two fields: a magnitude in the
//! `[d]ddmm.mmmm` degrees-and-decimal-minutes format, followed by a hemisphere
//! letter. This module converts such a pair into signed decimal degrees, negative
//! for the southern and western hemispheres.

use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize, verify},
    number::complete::double,
};

use crate::{DecodeField, Fields, Result, parse::field_enum};

field_enum! {
    /// The hemisphere letter following a coordinate magnitude.
    pub enum Hemisphere {
        /// N - North
        "N" => North,
        /// S - South
        "S" => South,
        /// E - East
        "E" => East,
        /// W - West
        "W" => West,
    }
}

impl Hemisphere {
    /// Returns `true` for the hemispheres whose coordinates are negative.
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// Reasons a magnitude/hemisphere pair is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// The magnitude is not in the `[d]ddmm[.m+]` format.
    #[error("invalid coordinate magnitude `{0}`")]
    Magnitude(String),

    /// The hemisphere is not one of `N`, `S`, `E` or `W`.
    #[error("invalid hemisphere `{0}`")]
    Hemisphere(String),
}

/// A latitude or longitude in signed decimal degrees.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decode::{Coordinate, Hemisphere};
///
/// let longitude = Coordinate::decode("12311.12", "W").unwrap();
/// assert!((longitude.degrees() - -123.18533).abs() < 1e-5);
/// assert_eq!(longitude.hemisphere(), Hemisphere::West);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    degrees: f64,
    hemisphere: Hemisphere,
}

impl Coordinate {
    /// Converts a magnitude and its hemisphere letter into decimal degrees.
    ///
    /// The magnitude has a whole part of four digits (latitude, `ddmm`) or five
    /// digits (longitude, `dddmm`), optionally followed by decimal minutes. The
    /// last two whole digits are the minutes; the digits before them are the
    /// degrees. A zero magnitude stays `0.0` in every hemisphere.
    ///
    /// # Errors
    ///
    /// Returns the [`CoordinateError`] of the first field that is not well formed.
    pub fn decode(magnitude: &str, hemisphere: &str) -> Result<Self, CoordinateError> {
        let (_, value) = all_consuming(self::magnitude)
            .parse(magnitude)
            .map_err(|_: nom::Err<nom::error::Error<&str>>| {
                CoordinateError::Magnitude(magnitude.to_owned())
            })?;

        let (_, hemisphere) = all_consuming(Hemisphere::parse)
            .parse(hemisphere)
            .map_err(|_| CoordinateError::Hemisphere(hemisphere.to_owned()))?;

        let degrees = if hemisphere.is_negative() && value != 0.0 {
            -value
        } else {
            value
        };

        Ok(Self {
            degrees,
            hemisphere,
        })
    }

    /// Signed decimal degrees.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The hemisphere the coordinate was transmitted with.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

/// Parses a `[d]ddmm[.m+]` magnitude into unsigned decimal degrees.
pub fn magnitude(i: &str) -> IResult<&str, f64> {
    let (i, token) = recognize((
        verify(digit1, |whole: &str| (4..=5).contains(&whole.len())),
        opt((char('.'), digit1)),
    ))
    .parse(i)?;

    let whole = token.find('.').unwrap_or(token.len());
    let (degrees, minutes) = token.split_at(whole - 2);
    let (_, degrees) = nom::character::complete::u16.parse(degrees)?;
    let (_, minutes) = double.parse(minutes)?;

    Ok((i, f64::from(degrees) + minutes / 60.0))
}

/// A coordinate spans two fields; both empty means no position was transmitted.
impl DecodeField for Option<Coordinate> {
    fn decode_field(fields: &mut Fields<'_>) -> Result<Self> {
        let (magnitude_position, magnitude) = fields.next_token()?;
        let (hemisphere_position, hemisphere) = fields.next_token()?;

        if magnitude.is_empty() && hemisphere.is_empty() {
            return Ok(None);
        }

        Coordinate::decode(magnitude, hemisphere)
            .map(Some)
            .map_err(|error| match error {
                CoordinateError::Magnitude(_) => fields.error(magnitude_position, Some(magnitude)),
                CoordinateError::Hemisphere(_) => {
                    fields.error(hemisphere_position, Some(hemisphere))
                }
            })
    }
}

impl DecodeField for Coordinate {
    fn decode_field(fields: &mut Fields<'_>) -> Result<Self> {
        let position = fields.position();
        <Option<Coordinate>>::decode_field(fields)?
            .ok_or_else(|| fields.error(position, Some("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RawSentence};

    fn assert_degrees(magnitude: &str, hemisphere: &str, expected: f64) {
        let coordinate = Coordinate::decode(magnitude, hemisphere).unwrap();
        assert!(
            (coordinate.degrees() - expected).abs() < 1e-5,
            "{magnitude},{hemisphere}: {} != {expected}",
            coordinate.degrees()
        );
    }

    #[test]
    fn test_decode() {
        assert_degrees("4916.45", "N", 49.27417);
        assert_degrees("12311.12", "W", -123.18533);
        assert_degrees("3751.65", "S", -37.86083);
        assert_degrees("14507.36", "E", 145.12267);
        assert_degrees("4807", "N", 48.11667);
        assert_degrees("00630.3372", "W", -6.50562);
    }

    #[test]
    fn test_round_trip() {
        for (degrees, minutes) in [(0u16, 0.0), (12, 34.5678), (89, 59.9999), (179, 0.0001)] {
            let expected = f64::from(degrees) + minutes / 60.0;

            let latitude = format!("{degrees:02}{minutes:07.4}");
            let longitude = format!("{degrees:03}{minutes:07.4}");

            if degrees < 100 {
                let coordinate = Coordinate::decode(&latitude, "N").unwrap();
                assert!((coordinate.degrees() - expected).abs() < 1e-6, "{latitude}");
            }

            let coordinate = Coordinate::decode(&longitude, "E").unwrap();
            assert!((coordinate.degrees() - expected).abs() < 1e-6, "{longitude}");
        }
    }

    #[test]
    fn test_zero_is_not_negated() {
        let south = Coordinate::decode("0000.00", "S").unwrap();
        let west = Coordinate::decode("00000.00", "W").unwrap();

        assert_eq!(south.degrees().to_bits(), 0.0f64.to_bits());
        assert_eq!(west.degrees().to_bits(), 0.0f64.to_bits());
        assert_eq!(west.hemisphere(), Hemisphere::West);
    }

    #[test]
    fn test_decode_invalid() {
        for magnitude in ["", "491", "491645.0", "49X6.45", "4916.", "4916.4x", "-916.45", ".45"] {
            assert_eq!(
                Coordinate::decode(magnitude, "N"),
                Err(CoordinateError::Magnitude(magnitude.to_owned())),
                "{magnitude}"
            );
        }

        for hemisphere in ["", "X", "n", "NS"] {
            assert_eq!(
                Coordinate::decode("4916.45", hemisphere),
                Err(CoordinateError::Hemisphere(hemisphere.to_owned())),
                "{hemisphere}"
            );
        }
    }

    #[test]
    fn test_decode_field() {
        let sentence = RawSentence::parse("$GPGLL,,,,,001037.00,V,N*4F").unwrap();
        let mut fields = Fields::new(&sentence);
        assert_eq!(<Option<Coordinate>>::decode_field(&mut fields), Ok(None));
        assert_eq!(fields.position(), 2);

        let sentence = RawSentence::parse("$GPGLL,4916.45,N,,W,225444,A*2C").unwrap();
        let mut fields = Fields::new(&sentence);
        assert!(<Option<Coordinate>>::decode_field(&mut fields).unwrap().is_some());
        assert_eq!(
            <Option<Coordinate>>::decode_field(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "GPGLL".to_owned(),
                position: 2,
                token: Some(String::new()),
            })
        );

        let sentence = RawSentence::parse("$GPGLL,4916.45,X,12311.12,W,225444,A*27").unwrap();
        let mut fields = Fields::new(&sentence);
        assert_eq!(
            Coordinate::decode_field(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "GPGLL".to_owned(),
                position: 1,
                token: Some("X".to_owned()),
            })
        );
    }
}
