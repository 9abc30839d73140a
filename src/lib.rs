//! Resolve NOAA Integrated Surface Database (ISD) station files by ICAO code
//! and decode their fixed-width observation records.

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod record;
pub mod station;

pub use error::{FetchError, IsdError};
pub use record::{decode, decode_isd, DecodedRecord, FieldMap, FieldSpec, Value};
pub use station::{build_index, CandidateFile, StationIndex, StationSegment};
