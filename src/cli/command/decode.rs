//! Decode ISD lines to CSV.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    cli::create_progress_bar,
    download::{bytes_to_lines, decompress},
    record::{decode, FieldMap},
};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    pub decoded: usize,
    pub skipped: usize,
}

/// Decodes a local ISD file, gzipped or not, and writes CSV to stdout.
pub fn decode_file(path: &Path) -> Result<DecodeSummary> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let bytes = if bytes.starts_with(&GZIP_MAGIC) {
        decompress(&bytes)?
    } else {
        bytes
    };

    let lines = bytes_to_lines(bytes)?;
    let stdout = std::io::stdout();

    write_records(&lines, &FieldMap::isd(), stdout.lock())
}

/// Writes a header row of field names, then one row per decodable line.
///
/// Lines that fail to decode are logged and skipped.
pub fn write_records<W: Write>(
    lines: &[String],
    field_map: &FieldMap,
    writer: W,
) -> Result<DecodeSummary> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(field_map.names())?;

    let pb = create_progress_bar(lines.len() as u64, "Decoding records".to_string());
    let mut summary = DecodeSummary::default();

    for (n, line) in lines.iter().enumerate() {
        match decode(line, field_map) {
            Ok(record) => {
                wtr.write_record(record.values().map(|v| v.to_string()))?;
                summary.decoded += 1;
            }
            Err(e) => {
                warn!(line = n + 1, error = %e, "skipping record");
                summary.skipped += 1;
            }
        }
        pb.inc(1);
    }

    wtr.flush()?;
    pb.finish_with_message("Records decoded");
    info!(
        decoded = summary.decoded,
        skipped = summary.skipped,
        "finished decoding"
    );

    Ok(summary)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use flate2::{write::GzEncoder, Compression};
    use tempfile::TempDir;

    use super::*;

    const LINE: &str = concat!(
        "0125", "727930", "24233", "201501010053", "4", "+47450", "-122300", "FM-15", "+0131",
        "KSEA ", "V020", "160", "1", "N", "0046", "1", "00610", "1", "9", "N", "016093", "1",
        "N", "9", "+0056", "1", "+0033", "1", "10132", "1"
    );

    #[test]
    fn should_write_header_and_rows() {
        let lines = vec![LINE.to_string(), "too short".to_string(), LINE.to_string()];
        let mut out = Vec::new();

        let summary = write_records(&lines, &FieldMap::isd(), &mut out).unwrap();
        assert_eq!(
            summary,
            DecodeSummary {
                decoded: 2,
                skipped: 1
            }
        );

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<_> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("total_var_chars,usaf_id,wban_id,obs_dtg_utc"));
        assert!(rows[1].starts_with("125,727930,24233,2015-01-01T00:53Z,4,47.45,-122.3,FM-15,131,"));
    }

    #[test]
    fn should_decode_gzipped_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("727930-24233-2015.gz");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(LINE.as_bytes()).unwrap();
        fs::write(&path, encoder.finish().unwrap()).unwrap();

        let summary = decode_file(&path).unwrap();
        assert_eq!(summary.decoded, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn should_decode_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("727930-24233-2015");
        fs::write(&path, format!("{}\n{}\n", LINE, LINE)).unwrap();

        let summary = decode_file(&path).unwrap();
        assert_eq!(summary.decoded, 2);
    }
}
