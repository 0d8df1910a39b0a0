//! Loader
//! Reads the economic indicator CSV into a Polars DataFrame.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns every input file must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "country",
    "date",
    "gdp_growth",
    "unemployment_rate",
    "poverty_rate",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Cells treated as missing, matching the pandas `read_csv` defaults.
/// Empty cells are always missing.
pub const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads the raw indicator table from disk.
pub struct DataLoader;

impl DataLoader {
    /// Read `file_path` and project it onto [`REQUIRED_COLUMNS`].
    ///
    /// Malformed rows are not skipped; any parse failure aborts the load.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        let null_values =
            NullValues::AllColumns(MISSING_TOKENS.iter().map(|&t| t.into()).collect());
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_null_values(Some(null_values))
            .finish()?
            .collect()?;

        Self::check_columns(&df)?;
        let df = df.select(REQUIRED_COLUMNS)?;
        log::info!(
            "Loaded {} rows from {}",
            df.height(),
            file_path.display()
        );

        Ok(df)
    }

    fn check_columns(df: &DataFrame) -> Result<(), LoaderError> {
        let names = df.get_column_names();
        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|name| name.as_str() == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }
}
