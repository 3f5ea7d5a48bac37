#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decode, Coordinate, Decode, RawSentence,
    sentences::{
        FaaMode, Status,
        parse::{magnetic_variation, trailing},
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         0         1 2       3 4        5 6   7   8    9  10 11
///         |         | |       | |        | |   |   |    |  |  |
///  $GPRMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,ddmmyy,x.x,a,m*hh
/// ```
///
/// The FAA mode indicator (11) was added in NMEA 2.3 and may be absent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
#[nmea(sentence_type("GPRMC"))]
pub struct RMC {
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: Status,
    /// Latitude
    pub latitude: Option<Coordinate>,
    /// Longitude
    pub longitude: Option<Coordinate>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Course over ground in degrees
    pub course_over_ground: Option<f32>,
    /// Fix date in UTC
    pub fix_date: Option<time::Date>,
    #[nmea(decoder(magnetic_variation))]
    /// Magnetic variation in degrees, west negative
    pub magnetic_variation: Option<f32>,
    #[nmea(decoder(trailing::<FaaMode>))]
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
    #[nmea(raw)]
    /// The sentence this record was decoded from
    pub sentence: RawSentence,
}
