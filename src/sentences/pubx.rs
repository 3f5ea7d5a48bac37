use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decode, Coordinate, Decode, RawSentence,
    sentences::{
        NavStatus,
        parse::{message_id, trailing, trailing_age},
    },
};

/// PUBX,00 - u-blox Lat/Long Position Data
///
/// `PUBX` is a multiplexed family: the first field selects the message layout,
/// and this record is the one for message id `00`.
///
/// ```text
///         0  1         2       3 4        5 6   7  8   9   10  11  12  13 14  15  16  17 18 19
///         |  |         |       | |        | |   |  |   |   |   |   |   |  |   |   |   |  |  |
///  $PUBX,00,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x.x,aa,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x.x,x,x,x*hh
/// ```
///
/// Fields from the vertical velocity (12) on are optional at the end of the
/// sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
#[nmea(sentence_type("PUBX"))]
pub struct PUBX00 {
    #[nmea(decoder(message_id::<0>))]
    /// Message id, always 0
    pub message_id: u8,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Latitude
    pub latitude: Option<Coordinate>,
    /// Longitude
    pub longitude: Option<Coordinate>,
    /// Altitude above the user datum ellipsoid in meters
    pub altitude: f32,
    /// Navigation status
    pub nav_status: NavStatus,
    /// Horizontal accuracy estimate in meters
    pub horizontal_accuracy: f32,
    /// Vertical accuracy estimate in meters
    pub vertical_accuracy: f32,
    /// Speed over ground in km/h
    pub speed_over_ground: f32,
    /// Course over ground in degrees
    pub course_over_ground: f32,
    #[nmea(decoder(trailing::<f32>))]
    /// Vertical velocity in m/s, positive downwards
    pub vertical_velocity: Option<f32>,
    #[nmea(decoder(trailing_age))]
    /// Age of differential corrections
    pub age_of_dgps: Option<Duration>,
    #[nmea(decoder(trailing::<f32>))]
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    #[nmea(decoder(trailing::<f32>))]
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
    #[nmea(decoder(trailing::<f32>))]
    /// Time Dilution of Precision
    pub tdop: Option<f32>,
    #[nmea(decoder(trailing::<u8>))]
    /// Number of satellites used in the navigation solution
    pub satellites_used: Option<u8>,
    #[nmea(decoder(trailing::<u8>))]
    /// Reserved, always 0
    pub reserved: Option<u8>,
    #[nmea(decoder(trailing::<u8>))]
    /// Dead reckoning used: 1 if DR is used, 0 otherwise
    pub dead_reckoning: Option<u8>,
    #[nmea(raw)]
    /// The sentence this record was decoded from
    pub sentence: RawSentence,
}
