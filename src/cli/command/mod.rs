pub mod decode;
pub mod records;
pub mod stations;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local};
use tracing::info;

pub use decode::{decode_file, write_records, DecodeSummary};
pub use records::records;
pub use stations::stations;

use crate::{
    cli::create_spinner,
    config::ArchiveConfig,
    download::fetch_url,
    station::{build_index, read_history, StationIndex},
};

pub fn make_csv_file_name(icao: &str, year: i32) -> Result<PathBuf> {
    let today = Local::now();
    let file_name = format!(
        "isd-{}-{}-{}-{:02}-{:02}.csv",
        icao.to_lowercase(),
        year,
        today.year(),
        today.month(),
        today.day()
    );

    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;

    Ok(home.join(file_name))
}

/// Downloads the station history file and indexes it by ICAO code.
pub async fn load_index(config: &ArchiveConfig) -> Result<StationIndex> {
    let bar = create_spinner("Downloading station history...".to_string());
    let bytes = fetch_url(&config.history_url(), bar.clone())
        .await
        .context("Failed to download station history")?;
    bar.finish_with_message("Station history downloaded");

    let rows = read_history(bytes.as_slice()).context("Failed to read station history")?;
    let index = build_index(rows)?;
    info!(stations = index.len(), "indexed stations by ICAO code");

    Ok(index)
}
