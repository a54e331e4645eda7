//! Tabular file I/O: the stage-1 observation sink and the stage-2 sources.

use crate::types::observation::Observation;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stage-1 output / stage-2 input table.
pub const OBSERVATIONS_FILE: &str = "weather_data.csv";

/// Stage-2 enriched output table.
pub const ADJUSTED_FILE: &str = "adj_weather_data.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build observation table")]
    Build(#[source] PolarsError),

    #[error("failed to create output file '{0}'")]
    Create(PathBuf, #[source] std::io::Error),

    #[error("failed to write table to '{0}'")]
    Write(PathBuf, #[source] PolarsError),

    #[error("failed to scan observation table '{0}'")]
    Scan(PathBuf, #[source] PolarsError),
}

/// Builds the stage-1 frame: one row per scraped day, missing fields as
/// nulls, columns in the fixed export order.
pub fn observations_frame(records: &[Observation]) -> Result<DataFrame, ExportError> {
    df!(
        "Station" => records.iter().map(|r| r.station.clone()).collect::<Vec<_>>(),
        "Location" => records.iter().map(|r| r.location.clone()).collect::<Vec<_>>(),
        "Elevation" => records.iter().map(|r| r.elevation.clone()).collect::<Vec<_>>(),
        "Date" => records.iter().map(|r| r.date.clone()).collect::<Vec<_>>(),
        "Temp Max" => records.iter().map(|r| r.temp_max.clone()).collect::<Vec<_>>(),
        "Temp Avg" => records.iter().map(|r| r.temp_avg.clone()).collect::<Vec<_>>(),
        "Temp Min" => records.iter().map(|r| r.temp_min.clone()).collect::<Vec<_>>(),
        "Precip Total" => records.iter().map(|r| r.precip_total.clone()).collect::<Vec<_>>(),
    )
    .map_err(ExportError::Build)
}

/// Serializes the accumulated observations to `path` as CSV.
pub fn write_observations(records: &[Observation], path: &Path) -> Result<(), ExportError> {
    let mut frame = observations_frame(records)?;
    write_table(&mut frame, path)
}

/// Writes any frame to `path` as CSV with headers.
pub fn write_table(frame: &mut DataFrame, path: &Path) -> Result<(), ExportError> {
    let mut file =
        File::create(path).map_err(|e| ExportError::Create(path.to_path_buf(), e))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(frame)
        .map_err(|e| ExportError::Write(path.to_path_buf(), e))?;
    Ok(())
}

/// Lazily scans a stage-1 table back in with an all-string schema, so the
/// adjustment pipeline's numeric coercions see exactly what was scraped.
pub fn scan_observations(path: &Path) -> Result<LazyFrame, ExportError> {
    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .map_err(|e| ExportError::Scan(path.to_path_buf(), e))
}
