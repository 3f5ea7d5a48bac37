//! Decodes NMEA 0183 lines from stdin and reports each one as a `tracing` event.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example decode_lines < capture.nmea
//! ```

use std::io::{self, BufRead};

use nmea0183_decode::{Error, LineEndingMode, NmeaSentence, SentenceParserBuilder};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let parser = SentenceParserBuilder::new()
        .line_ending_mode(LineEndingMode::Strip)
        .build();

    let (mut decoded, mut skipped, mut failed) = (0usize, 0usize, 0usize);

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parser.parse(&line) {
            Ok(sentence) => {
                decoded += 1;
                report(number + 1, &sentence);
            }
            Err(Error::UnsupportedSentenceType(type_tag)) => {
                skipped += 1;
                tracing::debug!(line = number + 1, %type_tag, "skipping unsupported sentence");
            }
            Err(error) => {
                failed += 1;
                tracing::warn!(line = number + 1, %error, input = %line, "failed to decode");
            }
        }
    }

    tracing::info!(decoded, skipped, failed, "done");
    Ok(())
}

fn report(line: usize, sentence: &NmeaSentence) {
    match sentence {
        NmeaSentence::RMC(rmc) => tracing::info!(
            line,
            status = ?rmc.status,
            latitude = ?rmc.latitude.map(|c| c.degrees()),
            longitude = ?rmc.longitude.map(|c| c.degrees()),
            speed_kn = ?rmc.speed_over_ground,
            "RMC"
        ),
        NmeaSentence::GGA(gga) => tracing::info!(
            line,
            quality = ?gga.fix_quality,
            satellites = ?gga.satellite_count,
            altitude_m = ?gga.altitude,
            "GGA"
        ),
        NmeaSentence::GSA(gsa) => tracing::info!(
            line,
            fix_mode = ?gsa.fix_mode,
            prns = ?gsa.fix_sats_prn,
            pdop = ?gsa.pdop,
            "GSA"
        ),
        NmeaSentence::GLL(gll) => tracing::info!(
            line,
            latitude = ?gll.latitude.map(|c| c.degrees()),
            longitude = ?gll.longitude.map(|c| c.degrees()),
            status = ?gll.status,
            "GLL"
        ),
        NmeaSentence::PGRME(pgrme) => tracing::info!(
            line,
            horizontal_m = ?pgrme.horizontal_error,
            vertical_m = ?pgrme.vertical_error,
            "PGRME"
        ),
        NmeaSentence::PUBX00(pubx) => tracing::info!(
            line,
            nav_status = ?pubx.nav_status,
            horizontal_accuracy_m = pubx.horizontal_accuracy,
            speed_kmh = pubx.speed_over_ground,
            "PUBX,00"
        ),
    }
}
