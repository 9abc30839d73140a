//! Error types for the decoder, the resolver and the archive fetch layer.

use thiserror::Error;

/// Errors raised by record decoding and station resolution.
#[derive(Debug, Error)]
pub enum IsdError {
    /// Date, timestamp or numeric text that does not match the ISD layout.
    #[error("malformed {what}: `{text}`")]
    Format { what: &'static str, text: String },

    #[error("record too short for field `{field}`: needs {required} bytes, line has {actual}")]
    RecordTooShort {
        field: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("no station file for {icao} in {year}")]
    NoCandidate { icao: String, year: i32 },

    #[error("field `{0}` is defined more than once in the field map")]
    DuplicateField(&'static str),
}

impl IsdError {
    pub fn format(what: &'static str, text: &str) -> Self {
        IsdError::Format {
            what,
            text: text.to_string(),
        }
    }
}

/// Errors raised while retrieving and unpacking archive files.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decompress archive")]
    Decompress(#[source] std::io::Error),

    #[error("archive is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}
