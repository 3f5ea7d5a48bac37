#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{self as nmea0183_decode, Decode, RawSentence, sentences::parse::meters};

/// PGRME - Garmin Estimated Error Information
///
/// ```text
///         0   1 2   3 4   5
///         |   | |   | |   |
///  $PGRME,x.x,M,x.x,M,x.x,M*hh
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
#[nmea(sentence_type("PGRME"))]
pub struct PGRME {
    #[nmea(decoder(meters))]
    /// Estimated horizontal position error in meters
    pub horizontal_error: Option<f32>,
    #[nmea(decoder(meters))]
    /// Estimated vertical position error in meters
    pub vertical_error: Option<f32>,
    #[nmea(decoder(meters))]
    /// Estimated spherical position error in meters
    pub spherical_error: Option<f32>,
    #[nmea(raw)]
    /// The sentence this record was decoded from
    pub sentence: RawSentence,
}
