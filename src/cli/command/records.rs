//! Download a station's observations for a year and save them as CSV.

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::{load_index, make_csv_file_name, write_records};
use crate::{
    cli::create_spinner,
    config::ArchiveConfig,
    download::{bytes_to_lines, decompress, fetch},
    record::FieldMap,
    station::CandidateFile,
};

pub async fn records(
    config: &ArchiveConfig,
    icao: &str,
    year: i32,
    output: Option<PathBuf>,
) -> Result<String> {
    let index = load_index(config).await?;
    let candidate = index.get_latest(icao, year)?;
    info!(
        file = %candidate.filename,
        start = %candidate.start_date,
        end = %candidate.end_date,
        "using latest station file"
    );

    let lines = download_latest(config, &candidate, year).await?;

    let csv_path = match output {
        Some(path) => path,
        None => make_csv_file_name(icao, year)?,
    };
    let file = File::create(&csv_path)
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;

    write_records(&lines, &FieldMap::isd(), BufWriter::new(file))?;

    Ok(csv_path.to_string_lossy().to_string())
}

async fn download_latest(
    config: &ArchiveConfig,
    candidate: &CandidateFile,
    year: i32,
) -> Result<Vec<String>> {
    let bar = create_spinner(format!("Downloading {}...", candidate.filename));
    let gz = fetch(config, &config.year_path(year), &candidate.filename, bar.clone())
        .await
        .with_context(|| format!("Failed to download {}", candidate.filename))?;
    bar.finish_with_message(format!("{} downloaded", candidate.filename));

    let lines = bytes_to_lines(decompress(&gz)?)?;
    info!(lines = lines.len(), "unpacked {}", candidate.base_file);

    Ok(lines)
}
