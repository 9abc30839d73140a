//! Stations indexed by ICAO code, and the archive files that hold their
//! observations for a given year.

pub mod history;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::IsdError;
pub use history::{read_history, HistoryRow};

const ISD_FILE_DATE_FORMAT: &str = "%Y%m%d";

/// One period of a station's history under a single USAF/WBAN identity.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSegment {
    pub usaf_id: String,
    pub wban_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub name: String,
    pub state: String,
    pub country: String,
}

impl StationSegment {
    fn from_row(row: HistoryRow) -> Result<Self, IsdError> {
        Ok(StationSegment {
            start_date: parse_date(&row.begin)?,
            end_date: parse_date(&row.end)?,
            usaf_id: row.usaf,
            wban_id: row.wban,
            name: row.name,
            state: row.state,
            country: row.country,
        })
    }

    /// Whether the segment is active on January 1st of `year`.
    fn covers_start_of(&self, year: i32) -> bool {
        match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(jan_1) => self.start_date <= jan_1 && jan_1 <= self.end_date,
            None => false,
        }
    }

    fn candidate(&self, year: i32) -> CandidateFile {
        let base_file = format!("{}-{}-{}", self.usaf_id, self.wban_id, year);

        CandidateFile {
            filename: format!("{}.gz", base_file),
            base_file,
            start_date: self.start_date.format(ISD_FILE_DATE_FORMAT).to_string(),
            end_date: self.end_date.format(ISD_FILE_DATE_FORMAT).to_string(),
        }
    }
}

/// An archive file that may hold a station's observations for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub filename: String,
    pub base_file: String,
    pub start_date: String,
    pub end_date: String,
}

/// Station segments keyed by upper-case ICAO code, in source order.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    stations: HashMap<String, Vec<StationSegment>>,
}

/// Builds the index from station history rows, skipping rows without an
/// ICAO code. A malformed `BEGIN` or `END` date fails the whole build.
pub fn build_index<I>(rows: I) -> Result<StationIndex, IsdError>
where
    I: IntoIterator<Item = HistoryRow>,
{
    let mut stations: HashMap<String, Vec<StationSegment>> = HashMap::new();

    for row in rows {
        let icao = row.icao.trim().to_uppercase();
        if icao.is_empty() {
            continue;
        }

        let segment = StationSegment::from_row(row)?;
        stations.entry(icao).or_default().push(segment);
    }

    Ok(StationIndex { stations })
}

impl StationIndex {
    pub fn segments(&self, icao: &str) -> Option<&[StationSegment]> {
        self.stations.get(&icao.to_uppercase()).map(Vec::as_slice)
    }

    /// Number of indexed ICAO codes.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Candidate files for `icao` in `year`, most recently started first.
    ///
    /// A segment is a candidate only if it is active on January 1st of
    /// `year`; a segment that starts later in the year is not returned.
    pub fn resolve(&self, icao: &str, year: i32) -> Vec<CandidateFile> {
        let Some(segments) = self.segments(icao) else {
            return Vec::new();
        };

        let mut candidates: Vec<CandidateFile> = segments
            .iter()
            .filter(|s| s.covers_start_of(year))
            .map(|s| s.candidate(year))
            .collect();

        // stable: equal start dates keep source order
        candidates.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        candidates
    }

    /// The most recently started candidate for `icao` in `year`.
    pub fn get_latest(&self, icao: &str, year: i32) -> Result<CandidateFile, IsdError> {
        self.resolve(icao, year)
            .into_iter()
            .next()
            .ok_or_else(|| IsdError::NoCandidate {
                icao: icao.to_uppercase(),
                year,
            })
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, IsdError> {
    NaiveDate::parse_from_str(text.trim(), ISD_FILE_DATE_FORMAT)
        .map_err(|_| IsdError::format("station history date", text))
}

// -- Tests -------------------------------------------------------------------
