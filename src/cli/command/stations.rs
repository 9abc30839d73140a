//! List the archive files that may hold a station's observations for a year.

use anyhow::Result;
use tracing::info;

use super::load_index;
use crate::{config::ArchiveConfig, station::CandidateFile};

pub async fn stations(config: &ArchiveConfig, icao: &str, year: i32) -> Result<Vec<CandidateFile>> {
    let index = load_index(config).await?;
    let candidates = index.resolve(icao, year);

    info!(icao, year, candidates = candidates.len(), "resolved station files");

    Ok(candidates)
}

/// One line per candidate, newest first.
pub fn format_candidates(candidates: &[CandidateFile]) -> String {
    candidates
        .iter()
        .map(|c| format!("{}  {} - {}", c.filename, c.start_date, c.end_date))
        .collect::<Vec<_>>()
        .join("\n")
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_format_candidates() {
        let candidates = vec![
            CandidateFile {
                filename: "222222-00002-2015.gz".to_string(),
                base_file: "222222-00002-2015".to_string(),
                start_date: "20110101".to_string(),
                end_date: "20201231".to_string(),
            },
            CandidateFile {
                filename: "111111-00001-2015.gz".to_string(),
                base_file: "111111-00001-2015".to_string(),
                start_date: "20000101".to_string(),
                end_date: "20201231".to_string(),
            },
        ];

        assert_eq!(
            format_candidates(&candidates),
            "222222-00002-2015.gz  20110101 - 20201231\n111111-00001-2015.gz  20000101 - 20201231"
        );
    }
}
