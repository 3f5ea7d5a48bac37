//! Decoders for values spanning several fields, or needing a check beyond the
//! shape of a single token. They are plugged into the sentence structs with
//! `#[nmea(decoder(...))]`.

use std::time::Duration;

use nom::{
    character::complete::{anychar, one_of, u8},
    combinator::verify,
};

use crate::{DecodeField, Error, Fields, Result, parse::float};

/// Decodes a value followed by its unit letter, e.g. `545.4,M`.
///
/// Both fields empty yields `None`. A unit other than `unit`, or a value without
/// its unit (or the other way round), is an error at the field in question.
pub fn with_unit(fields: &mut Fields<'_>, unit: char) -> Result<Option<f32>> {
    let (position, value) = fields.next_token()?;
    let (unit_position, found) = fields.next_token()?;

    if value.is_empty() && found.is_empty() {
        return Ok(None);
    }

    let value = fields.token(position, value, float)?;
    fields.token(unit_position, found, verify(anychar, |c: &char| *c == unit))?;

    Ok(Some(value))
}

/// Decodes a distance in meters (`x.x,M`).
pub fn meters(fields: &mut Fields<'_>) -> Result<Option<f32>> {
    with_unit(fields, 'M')
}

/// Decodes a magnetic variation (`x.x,E|W`) into signed degrees, west negative.
///
/// Both fields empty means no variation was transmitted.
pub fn magnetic_variation(fields: &mut Fields<'_>) -> Result<Option<f32>> {
    let (position, value) = fields.next_token()?;
    let (direction_position, direction) = fields.next_token()?;

    if value.is_empty() && direction.is_empty() {
        return Ok(None);
    }

    let value = fields.token(position, value, float)?;
    let direction = fields.token(direction_position, direction, one_of("EW"))?;

    Ok(Some(if direction == 'W' { -value } else { value }))
}

/// Decodes an age given in seconds, e.g. of differential corrections.
pub fn age(fields: &mut Fields<'_>) -> Result<Option<Duration>> {
    let Some(seconds) = fields.optional(float)? else {
        return Ok(None);
    };

    Duration::try_from_secs_f32(seconds)
        .map(Some)
        .map_err(|_| fields.error_at_previous())
}

/// Like [`age`], for a field that may be absent from the end of the sentence.
pub fn trailing_age(fields: &mut Fields<'_>) -> Result<Option<Duration>> {
    if fields.is_exhausted() {
        return Ok(None);
    }

    age(fields)
}

/// Decodes a field that later protocol revisions appended to a sentence.
///
/// Senders of older revisions end the sentence before it, which yields `None`
/// like an empty field does.
pub fn trailing<T>(fields: &mut Fields<'_>) -> Result<Option<T>>
where
    Option<T>: DecodeField,
{
    if fields.is_exhausted() {
        return Ok(None);
    }

    <Option<T>>::decode_field(fields)
}

/// Decodes the twelve PRN slots of a GSA sentence, skipping the empty ones.
pub fn fix_satellites(fields: &mut Fields<'_>) -> Result<heapless::Vec<u8, 12>> {
    let mut prns = heapless::Vec::new();

    for _ in 0..12 {
        if let Some(prn) = fields.optional(u8)? {
            prns.push(prn).map_err(|_| fields.error_at_previous())?;
        }
    }

    Ok(prns)
}

/// Decodes the message id field of a multiplexed sentence, which must be `ID`.
pub fn message_id<const ID: u8>(fields: &mut Fields<'_>) -> Result<u8> {
    let id = fields.required(u8)?;

    if id != ID {
        return Err(Error::UnsupportedVariant {
            type_tag: fields.type_tag().to_owned(),
            id,
        });
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawSentence, sentences::FaaMode};

    fn raw(line: &str) -> RawSentence {
        RawSentence::parse(line).unwrap()
    }

    #[test]
    fn test_meters() {
        let sentence = raw("$PGRME,15.0,M,45.0,M,25.0,M*1C");
        let mut fields = Fields::new(&sentence);
        assert_eq!(meters(&mut fields), Ok(Some(15.0)));
        assert_eq!(meters(&mut fields), Ok(Some(45.0)));
        assert_eq!(meters(&mut fields), Ok(Some(25.0)));

        let sentence = raw("$PGRME,15.0,F,45.0,M,25.0,M*17");
        let mut fields = Fields::new(&sentence);
        assert_eq!(
            meters(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "PGRME".to_owned(),
                position: 1,
                token: Some("F".to_owned()),
            })
        );

        let cases = [
            ("$PGRME,15.0,,45.0,M,25.0,M*51", 1, ""),
            ("$PGRME,,M,45.0,M,25.0,M*06", 0, ""),
            ("$PGRME,nan,M,45.0,M,25.0,M*67", 0, "nan"),
            ("$PGRME,inf,M,45.0,M,25.0,M*67", 0, "inf"),
        ];

        for (input, position, token) in cases {
            let sentence = raw(input);
            let mut fields = Fields::new(&sentence);
            assert_eq!(
                meters(&mut fields),
                Err(Error::FieldDecode {
                    type_tag: "PGRME".to_owned(),
                    position,
                    token: Some(token.to_owned()),
                }),
                "{input}"
            );
        }

        let sentence = raw("$PGRME,15.0,M,45.0,M,25.0*7D");
        let mut fields = Fields::new(&sentence);
        fields.skip(4);
        assert_eq!(
            meters(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "PGRME".to_owned(),
                position: 5,
                token: None,
            })
        );
    }

    #[test]
    fn test_magnetic_variation() {
        let sentence = raw("$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62");
        let mut fields = Fields::new(&sentence);
        fields.skip(9);
        assert_eq!(magnetic_variation(&mut fields), Ok(Some(11.3)));

        let sentence = raw("$GPRMC,235959,V,,,,,,,311299,,,N*53");
        let mut fields = Fields::new(&sentence);
        fields.skip(9);
        assert_eq!(magnetic_variation(&mut fields), Ok(None));

        let sentence =
            raw("$GPRMC,123519,A,4807.038,N,01131.000,E,abc,0.83,230394,004.2,W,A*7A");
        let mut fields = Fields::new(&sentence);
        fields.skip(9);
        assert_eq!(magnetic_variation(&mut fields), Ok(Some(-4.2)));

        let sentence =
            raw("$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,inf,E,A*4B");
        let mut fields = Fields::new(&sentence);
        fields.skip(9);
        assert_eq!(
            magnetic_variation(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "GPRMC".to_owned(),
                position: 9,
                token: Some("inf".to_owned()),
            })
        );
    }

    #[test]
    fn test_age() {
        let sentence =
            raw("$GPGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,2.5,0042*76");
        let mut fields = Fields::new(&sentence);
        fields.skip(12);
        assert_eq!(age(&mut fields), Ok(Some(Duration::from_millis(2500))));
        fields.skip(1);
        assert_eq!(trailing_age(&mut fields), Ok(None));

        let sentence = raw("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,-2.5,*43");
        let mut fields = Fields::new(&sentence);
        fields.skip(12);
        assert_eq!(
            age(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "GPGGA".to_owned(),
                position: 12,
                token: Some("-2.5".to_owned()),
            })
        );

        let mut fields = Fields::new(&sentence);
        fields.skip(13);
        assert_eq!(age(&mut fields), Ok(None));
        assert!(age(&mut fields).is_err());
    }

    #[test]
    fn test_trailing() {
        let sentence = raw("$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C");
        let mut fields = Fields::new(&sentence);
        fields.skip(6);

        assert_eq!(trailing::<FaaMode>(&mut fields), Ok(Some(FaaMode::Autonomous)));
        assert_eq!(trailing::<FaaMode>(&mut fields), Ok(None));
        assert_eq!(trailing::<f32>(&mut fields), Ok(None));
    }

    #[test]
    fn test_fix_satellites() {
        let sentence = raw("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39");
        let mut fields = Fields::new(&sentence);
        fields.skip(2);

        let prns = fix_satellites(&mut fields).unwrap();
        assert_eq!(prns.as_slice(), [4, 5, 9, 12, 24]);
        assert_eq!(fields.position(), 14);
    }

    #[test]
    fn test_message_id() {
        let sentence = raw("$PUBX,03,11,23,-,,,45,010,29,-,,,46,013*16");
        let mut fields = Fields::new(&sentence);
        assert_eq!(message_id::<3>(&mut fields), Ok(3));

        let mut fields = Fields::new(&sentence);
        assert_eq!(
            message_id::<0>(&mut fields),
            Err(Error::UnsupportedVariant {
                type_tag: "PUBX".to_owned(),
                id: 3,
            })
        );

        let sentence = raw("$PUBX,abc,1*4E");
        let mut fields = Fields::new(&sentence);
        assert_eq!(
            message_id::<0>(&mut fields),
            Err(Error::FieldDecode {
                type_tag: "PUBX".to_owned(),
                position: 0,
                token: Some("abc".to_owned()),
            })
        );
    }
}
