#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    self as nmea0183_decode, Coordinate, Decode, RawSentence,
    sentences::{FaaMode, Status, parse::trailing},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         0       1 2        3 4         5 6
///         |       | |        | |         | |
///  $GPGLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Decode)]
#[nmea(sentence_type("GPGLL"))]
pub struct GLL {
    /// Latitude
    pub latitude: Option<Coordinate>,
    /// Longitude
    pub longitude: Option<Coordinate>,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Status Mode Indicator
    pub status: Status,
    #[nmea(decoder(trailing::<FaaMode>))]
    /// FAA Mode Indicator
    pub faa_mode: Option<FaaMode>,
    #[nmea(raw)]
    /// The sentence this record was decoded from
    pub sentence: RawSentence,
}

#[cfg(test)]
mod tests {
    use time::macros::time;

    use super::*;
    use crate::{Error, Hemisphere};

    fn decode(line: &str) -> nmea0183_decode::Result<GLL> {
        GLL::decode(RawSentence::parse(line)?)
    }

    #[test]
    fn test_gll_parsing() {
        let gll = decode("$GPGLL,4916.45,N,12311.12,W,225444,A*31").unwrap();

        let latitude = gll.latitude.unwrap();
        let longitude = gll.longitude.unwrap();
        assert!((latitude.degrees() - 49.27417).abs() < 1e-5);
        assert!((longitude.degrees() - -123.18533).abs() < 1e-5);
        assert_eq!(longitude.hemisphere(), Hemisphere::West);
        assert_eq!(gll.fix_time, Some(time!(22:54:44)));
        assert_eq!(gll.status, Status::Valid);
        assert_eq!(gll.faa_mode, None);

        let gll = decode("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C").unwrap();
        assert_eq!(gll.faa_mode, Some(FaaMode::Autonomous));

        let gll = decode("$GPGLL,3751.65,S,14507.36,E,225444.500,V,E*52").unwrap();
        assert!(gll.latitude.unwrap().degrees() < 0.0);
        assert!(gll.longitude.unwrap().degrees() > 0.0);
        assert_eq!(gll.fix_time, Some(time!(22:54:44.500)));
        assert_eq!(gll.status, Status::Invalid);
        assert_eq!(gll.faa_mode, Some(FaaMode::Estimated));

        let gll = decode("$GPGLL,,,,,001037.00,V,N*4F").unwrap();
        assert_eq!(gll.latitude, None);
        assert_eq!(gll.longitude, None);
        assert_eq!(gll.faa_mode, Some(FaaMode::DataNotValid));
    }

    #[test]
    fn test_gll_zero_position() {
        let gll = decode("$GPGLL,0000.00,S,00000.00,W,000000,A*25").unwrap();

        assert_eq!(gll.latitude.unwrap().degrees(), 0.0);
        assert_eq!(gll.longitude.unwrap().degrees(), 0.0);
        assert!(!gll.longitude.unwrap().degrees().is_sign_negative());
    }

    #[test]
    fn test_gll_invalid() {
        let cases = [
            ("$GPGLL,49X6.45,N,12311.12,W,225444,A*58", 0, Some("49X6.45")),
            ("$GPGLL,4916.45,X,12311.12,W,225444,A*27", 1, Some("X")),
            ("$GPGLL,4916.45,N,,W,225444,A*2C", 2, Some("")),
            ("$GPGLL,4916.45,N,12311.12,W,22544,A*05", 4, Some("22544")),
            ("$GPGLL,4916.45,N,12311.12,W,225444*5C", 5, None),
            ("$GPGLL,4916.45,N,12311.12,W,225444,A,A,X*28", 7, Some("X")),
        ];

        for (input, position, token) in cases {
            assert_eq!(
                decode(input),
                Err(Error::FieldDecode {
                    type_tag: "GPGLL".to_owned(),
                    position,
                    token: token.map(str::to_owned),
                }),
                "{input}"
            );
        }
    }
}
