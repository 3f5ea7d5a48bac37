use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decode, Coordinate, Decode, RawSentence,
    sentences::{
        Quality,
        parse::{age, meters},
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      10
///         0         1       2 3        4 5 6  7   8   9 |   11 12  13
///         |         |       | |        | | |  |   |   | |   | |   |
///  $GPGGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
#[nmea(sentence_type("GPGGA"))]
pub struct GGA {
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Latitude
    pub latitude: Option<Coordinate>,
    /// Longitude
    pub longitude: Option<Coordinate>,
    /// GPS Quality Indicator
    pub fix_quality: Quality,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    #[nmea(decoder(meters))]
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    #[nmea(decoder(meters))]
    /// Geoidal separation in meters, the difference between the WGS-84 earth
    /// ellipsoid and mean sea level (geoid), negative values indicate that the
    /// geoid is below the ellipsoid
    pub geoidal_separation: Option<f32>,
    #[nmea(decoder(age))]
    /// Age of Differential GPS data, null field when DGPS is not used
    pub age_of_dgps: Option<Duration>,
    /// Differential reference station ID
    pub ref_station_id: Option<u16>,
    #[nmea(raw)]
    /// The sentence this record was decoded from
    pub sentence: RawSentence,
}
