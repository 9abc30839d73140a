//! Fetches and unpacks files from the ISD archive.

use std::io::Read;

use flate2::read::GzDecoder;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{config::ArchiveConfig, error::FetchError};

const MAX_PREALLOCATION: u64 = 64 << 20;

/// Downloads `filename` from `path` on the configured archive host, with a
/// progress bar based on content length.
pub async fn fetch(
    config: &ArchiveConfig,
    path: &str,
    filename: &str,
    progress_bar: ProgressBar,
) -> Result<Vec<u8>, FetchError> {
    fetch_url(&config.url(path, filename), progress_bar).await
}

/// Downloads `url`, growing the buffer as chunks arrive.
pub async fn fetch_url(url: &str, progress_bar: ProgressBar) -> Result<Vec<u8>, FetchError> {
    debug!(%url, "fetching");

    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(request_error)?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let total_size = response.content_length().unwrap_or(0);
    if total_size > 0 {
        progress_bar.set_length(total_size);
        progress_bar.set_style(
            ProgressStyle::with_template(
                "{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) {eta}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
        );
    }

    // Content-Length is untrusted; cap the up-front allocation.
    let mut content = Vec::with_capacity(total_size.min(MAX_PREALLOCATION) as usize);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(request_error)?;
        content.extend_from_slice(&chunk);
        progress_bar.set_position(content.len() as u64);
    }

    debug!(%url, bytes = content.len(), "fetched");

    Ok(content)
}

/// Gunzips a downloaded archive file.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, FetchError> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(FetchError::Decompress)?;

    Ok(out)
}

/// Splits decoded archive content into lines.
pub fn bytes_to_lines(bytes: Vec<u8>) -> Result<Vec<String>, FetchError> {
    let text = String::from_utf8(bytes)?;

    Ok(text.lines().map(str::to_string).collect())
}

// -- Tests -------------------------------------------------------------------
