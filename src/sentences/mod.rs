//! # Typed Sentences
//!
//! One strongly-typed record per supported sentence layout, and the
//! [`NmeaSentence`] enum that unifies them as the result of dispatch.

mod gga;
mod gll;
mod gsa;
pub mod parse;
mod pgrme;
mod pubx;
mod rmc;

pub use gga::GGA;
pub use gll::GLL;
pub use gsa::GSA;
pub use pgrme::PGRME;
pub use pubx::PUBX00;
pub use rmc::RMC;

use crate::{RawSentence, Result, parse::field_enum};

/// Access to the [`RawSentence`] a record was decoded from.
///
/// Every typed sentence keeps its raw form for diagnostics and re-logging.
pub trait Sentence {
    /// The tokenized sentence this value was decoded from.
    fn raw_sentence(&self) -> &RawSentence;

    /// The type tag of the sentence.
    fn type_tag(&self) -> &str {
        self.raw_sentence().type_tag()
    }
}

/// A typed sentence that can be decoded from a [`RawSentence`].
///
/// Usually derived with [`macro@crate::Decode`], which generates the positional
/// field decoder from the struct definition.
pub trait Decode: Sentence + Sized {
    /// The type tag this decoder accepts, e.g. `GPRMC`.
    const SENTENCE_TYPE: &'static str;

    /// Decodes the fields of `sentence` into `Self`.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if the type tag is not [`Decode::SENTENCE_TYPE`].
    /// - [`Error::FieldDecode`] for the first field that is missing, malformed, or
    ///   left over once the layout is complete.
    ///
    /// [`Error::TypeMismatch`]: crate::Error::TypeMismatch
    /// [`Error::FieldDecode`]: crate::Error::FieldDecode
    fn decode(sentence: RawSentence) -> Result<Self>;
}

/// A unified enum representing all supported NMEA 0183 sentence types.
///
/// This is the result of [`parse`](crate::parse): each variant wraps the typed
/// record of one registered sentence layout. The [`Sentence`] implementation
/// gives access to the underlying [`RawSentence`] whatever the variant.
///
/// ## Supported Sentence Types
///
/// | Variant            | Type tag   | Description                                |
/// |--------------------|------------|--------------------------------------------|
/// | RMC([`RMC`])       | `GPRMC`    | Recommended Minimum Navigation Information |
/// | GGA([`GGA`])       | `GPGGA`    | Global Positioning System Fix Data         |
/// | GSA([`GSA`])       | `GPGSA`    | GPS DOP and active satellites              |
/// | GLL([`GLL`])       | `GPGLL`    | Geographic Position - Latitude/Longitude   |
/// | PGRME([`PGRME`])   | `PGRME`    | Garmin estimated position error            |
/// | PUBX00([`PUBX00`]) | `PUBX`, 00 | u-blox lat/long position data              |
///
/// ## Example Usage
///
/// ```rust
/// use nmea0183_decode::{NmeaSentence, Sentence};
///
/// let sentence = nmea0183_decode::parse("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();
/// assert_eq!(sentence.type_tag(), "GPGLL");
///
/// match sentence {
///     NmeaSentence::GLL(gll) => {
///         let latitude = gll.latitude.unwrap().degrees();
///         assert!((latitude - 49.27417).abs() < 1e-5);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GPS DOP and active satellites
    GSA(GSA),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Garmin estimated position error
    PGRME(PGRME),
    /// u-blox lat/long position data
    PUBX00(PUBX00),
}

impl Sentence for NmeaSentence {
    fn raw_sentence(&self) -> &RawSentence {
        match self {
            Self::RMC(sentence) => sentence.raw_sentence(),
            Self::GGA(sentence) => sentence.raw_sentence(),
            Self::GSA(sentence) => sentence.raw_sentence(),
            Self::GLL(sentence) => sentence.raw_sentence(),
            Self::PGRME(sentence) => sentence.raw_sentence(),
            Self::PUBX00(sentence) => sentence.raw_sentence(),
        }
    }
}

macro_rules! impl_from_sentence {
    ($($variant:ident($sentence:ty)),* $(,)?) => ($(
        impl From<$sentence> for NmeaSentence {
            fn from(sentence: $sentence) -> Self {
                Self::$variant(sentence)
            }
        }
    )*)
}

impl_from_sentence!(
    RMC(RMC),
    GGA(GGA),
    GSA(GSA),
    GLL(GLL),
    PGRME(PGRME),
    PUBX00(PUBX00),
);

field_enum! {
    /// Status Mode Indicator
    pub enum Status {
        /// A - Valid
        "A" => Valid,
        /// V - Invalid
        "V" => Invalid,
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// C - Quectel Querk, "Caution"
        "C" => Caution,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// F - RTK Float mode
        "F" => FloatRtk,
        /// M - Manual Input Mode
        "M" => Manual,
        /// N - Data Not Valid
        "N" => DataNotValid,
        /// P - Precise
        "P" => Precise,
        /// R - RTK Integer mode
        "R" => FixedRtk,
        /// S - Simulated Mode
        "S" => Simulator,
        /// U - Quectel Querk, "Unsafe"
        "U" => Unsafe,
    }
}

field_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        "0" => NoFix,
        /// 1 - GPS fix
        "1" => GPSFix,
        /// 2 - Differential GPS fix
        "2" => DGPSFix,
        /// 3 - PPS fix
        "3" => PPSFix,
        /// 4 - Real Time Kinematic
        "4" => RTK,
        /// 5 - Float RTK
        "5" => FloatRTK,
        /// 6 - estimated (dead reckoning)
        "6" => Estimated,
        /// 7 - Manual input mode
        "7" => Manual,
        /// 8 - Simulation mode
        "8" => Simulation,
    }
}

field_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        "A" => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
    }
}

field_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

field_enum! {
    /// u-blox navigation status
    pub enum NavStatus {
        /// NF - No fix
        "NF" => NoFix,
        /// DR - Dead reckoning only solution
        "DR" => DeadReckoning,
        /// G2 - Stand alone 2D solution
        "G2" => Standalone2D,
        /// G3 - Stand alone 3D solution
        "G3" => Standalone3D,
        /// D2 - Differential 2D solution
        "D2" => Differential2D,
        /// D3 - Differential 3D solution
        "D3" => Differential3D,
        /// RK - Combined GPS and dead reckoning solution
        "RK" => Combined,
        /// TT - Time only solution
        "TT" => TimeOnly,
    }
}
