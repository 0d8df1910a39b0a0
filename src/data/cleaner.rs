//! Data Cleaner Module
//! Parses dates, counts missing values and drops incomplete rows.

use crate::data::dataset::{Dataset, Record};
use crate::data::loader::{MISSING_TOKENS, REQUIRED_COLUMNS};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Date layouts accepted for the `date` column.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Unparseable date {value:?} in row {row}")]
    InvalidDate { row: usize, value: String },
    #[error("Non-numeric value {value:?} in column {column}, row {row}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
}

/// Missing value count for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMissing {
    pub column: String,
    pub missing: usize,
}

/// Diagnostic summary of the missing-value pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    pub columns: Vec<ColumnMissing>,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl MissingReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_before - self.rows_after
    }

    pub fn missing_in(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.missing)
    }
}

/// Turns the raw table into a typed, complete dataset.
pub struct DataCleaner;

impl DataCleaner {
    /// Parse one date cell. Timestamps keep only their date part.
    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let text = raw.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                    .map(|dt| dt.date())
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(text)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    /// Convert the date column, count missing cells per column and drop
    /// every row that has at least one missing cell.
    pub fn clean(df: &DataFrame) -> Result<(Dataset, MissingReport), CleanerError> {
        let rows_before = df.height();

        let countries = Self::text_values(df, "country")?;
        let dates = Self::date_values(df)?;
        let gdp = Self::numeric_values(df, "gdp_growth")?;
        let unemployment = Self::numeric_values(df, "unemployment_rate")?;
        let poverty = Self::numeric_values(df, "poverty_rate")?;

        let counts = [
            countries.iter().filter(|v| v.is_none()).count(),
            dates.iter().filter(|v| v.is_none()).count(),
            gdp.iter().filter(|v| v.is_none()).count(),
            unemployment.iter().filter(|v| v.is_none()).count(),
            poverty.iter().filter(|v| v.is_none()).count(),
        ];

        let mut records = Vec::with_capacity(rows_before);
        for i in 0..rows_before {
            if let (Some(country), Some(date), Some(g), Some(u), Some(p)) = (
                countries[i].clone(),
                dates[i],
                gdp[i],
                unemployment[i],
                poverty[i],
            ) {
                records.push(Record {
                    country,
                    date,
                    gdp_growth: g,
                    unemployment_rate: u,
                    poverty_rate: p,
                });
            }
        }

        let report = MissingReport {
            columns: REQUIRED_COLUMNS
                .iter()
                .zip(counts)
                .map(|(column, missing)| ColumnMissing {
                    column: column.to_string(),
                    missing,
                })
                .collect(),
            rows_before,
            rows_after: records.len(),
        };

        if report.rows_dropped() > 0 {
            log::warn!(
                "Dropped {} of {} rows with missing values",
                report.rows_dropped(),
                rows_before
            );
        }

        Ok((Dataset::new(records), report))
    }

    fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, CleanerError> {
        let column = df.column(name)?.cast(&DataType::String)?;
        let values = column
            .str()?
            .into_iter()
            .map(|v| {
                v.map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .collect();
        Ok(values)
    }

    /// Empty dates are missing; non-empty dates that fail to parse abort.
    fn date_values(df: &DataFrame) -> Result<Vec<Option<NaiveDate>>, CleanerError> {
        Self::text_values(df, "date")?
            .into_iter()
            .enumerate()
            .map(|(row, value)| match value {
                None => Ok(None),
                Some(text) => Self::parse_date(&text)
                    .map(Some)
                    .ok_or(CleanerError::InvalidDate { row, value: text }),
            })
            .collect()
    }

    /// Numeric cells as f64. NaN and the missing tokens count as missing;
    /// any other unparseable text is fatal.
    fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, CleanerError> {
        let column = df.column(name)?;
        let values: Vec<Option<f64>> = if column.dtype() == &DataType::String {
            column
                .str()?
                .into_iter()
                .enumerate()
                .map(|(row, cell)| Self::parse_number(name, row, cell))
                .collect::<Result<_, _>>()?
        } else {
            column.cast(&DataType::Float64)?.f64()?.into_iter().collect()
        };
        Ok(values
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect())
    }

    fn parse_number(
        name: &str,
        row: usize,
        cell: Option<&str>,
    ) -> Result<Option<f64>, CleanerError> {
        let Some(text) = cell.map(str::trim) else {
            return Ok(None);
        };
        if text.is_empty() || MISSING_TOKENS.contains(&text) {
            return Ok(None);
        }
        text.parse::<f64>()
            .map(Some)
            .map_err(|_| CleanerError::InvalidNumber {
                column: name.to_string(),
                row,
                value: text.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(
        countries: &[Option<&str>],
        dates: &[Option<&str>],
        gdp: &[Option<f64>],
        unemployment: &[Option<f64>],
        poverty: &[Option<f64>],
    ) -> DataFrame {
        DataFrame::new(vec![
            Column::new("country".into(), countries),
            Column::new("date".into(), dates),
            Column::new("gdp_growth".into(), gdp),
            Column::new("unemployment_rate".into(), unemployment),
            Column::new("poverty_rate".into(), poverty),
        ])
        .unwrap()
    }

    #[test]
    fn parses_common_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
        assert_eq!(DataCleaner::parse_date("2020-03-15"), Some(expected));
        assert_eq!(DataCleaner::parse_date("2020/03/15"), Some(expected));
        assert_eq!(DataCleaner::parse_date("03/15/2020"), Some(expected));
        assert_eq!(DataCleaner::parse_date(" 2020-03-15 12:30:00 "), Some(expected));
        assert_eq!(DataCleaner::parse_date("2020-03-15T08:00:00+02:00"), Some(expected));
        assert_eq!(DataCleaner::parse_date("March fifteenth"), None);
    }

    #[test]
    fn drops_rows_with_any_missing_field() {
        let df = frame(
            &[Some("Chile"), Some("Peru"), None, Some("Chile")],
            &[Some("2020-01-01"), Some("2020-01-01"), Some("2020-02-01"), None],
            &[Some(1.0), Some(f64::NAN), Some(3.0), Some(4.0)],
            &[Some(5.0), Some(6.0), Some(7.0), Some(8.0)],
            &[Some(9.0), Some(10.0), Some(11.0), Some(12.0)],
        );
        let (dataset, report) = DataCleaner::clean(&df).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].country, "Chile");
        assert_eq!(report.rows_before, 4);
        assert_eq!(report.rows_after, 1);
        assert_eq!(report.rows_dropped(), 3);
        assert_eq!(report.missing_in("country"), Some(1));
        assert_eq!(report.missing_in("date"), Some(1));
        assert_eq!(report.missing_in("gdp_growth"), Some(1));
        assert_eq!(report.missing_in("poverty_rate"), Some(0));
    }

    #[test]
    fn cleaned_rows_have_no_missing_values() {
        let df = frame(
            &[Some("A"), Some(" "), Some("C")],
            &[Some("2021-05-01"), Some("2021-05-02"), Some("")],
            &[Some(1.0), Some(2.0), Some(3.0)],
            &[Some(1.0), None, Some(3.0)],
            &[Some(1.0), Some(2.0), Some(3.0)],
        );
        let (dataset, _) = DataCleaner::clean(&df).unwrap();
        assert_eq!(dataset.len(), 1);
        for r in dataset.records() {
            assert!(!r.country.is_empty());
            assert!(r.gdp_growth.is_finite());
            assert!(r.unemployment_rate.is_finite());
            assert!(r.poverty_rate.is_finite());
        }
    }

    #[test]
    fn unparseable_date_is_fatal() {
        let df = frame(
            &[Some("A"), Some("B")],
            &[Some("2020-01-01"), Some("not a date")],
            &[Some(1.0), Some(2.0)],
            &[Some(1.0), Some(2.0)],
            &[Some(1.0), Some(2.0)],
        );
        match DataCleaner::clean(&df) {
            Err(CleanerError::InvalidDate { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "not a date");
            }
            other => panic!("expected date error, got {:?}", other.map(|(d, _)| d.len())),
        }
    }

    #[test]
    fn non_numeric_indicator_is_fatal() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), &["A"]),
            Column::new("date".into(), &["2020-01-01"]),
            Column::new("gdp_growth".into(), &["high"]),
            Column::new("unemployment_rate".into(), &[1.0]),
            Column::new("poverty_rate".into(), &[1.0]),
        ])
        .unwrap();
        match DataCleaner::clean(&df) {
            Err(CleanerError::InvalidNumber { column, row, value }) => {
                assert_eq!(column, "gdp_growth");
                assert_eq!(row, 0);
                assert_eq!(value, "high");
            }
            other => panic!("expected number error, got {:?}", other.map(|(d, _)| d.len())),
        }
    }

    #[test]
    fn bad_number_in_later_chunk_is_reported() {
        let mut gdp = Series::new("gdp_growth".into(), &["1.0", "2.0"]);
        gdp.append(&Series::new("gdp_growth".into(), &["3.0", "high"]))
            .unwrap();
        assert!(gdp.n_chunks() > 1);

        let df = DataFrame::new(vec![
            Column::new("country".into(), &["A", "B", "C", "D"]),
            Column::new("date".into(), &["2020-01-01"; 4]),
            Column::from(gdp),
            Column::new("unemployment_rate".into(), &[1.0, 2.0, 3.0, 4.0]),
            Column::new("poverty_rate".into(), &[1.0, 2.0, 3.0, 4.0]),
        ])
        .unwrap();
        match DataCleaner::clean(&df) {
            Err(CleanerError::InvalidNumber { row, value, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "high");
            }
            other => panic!("expected number error, got {:?}", other.map(|(d, _)| d.len())),
        }
    }

    #[test]
    fn missing_tokens_in_text_columns_are_dropped() {
        let df = DataFrame::new(vec![
            Column::new("country".into(), &["A", "B", "C"]),
            Column::new("date".into(), &["2020-01-01", "2020-02-01", "2020-03-01"]),
            Column::new("gdp_growth".into(), &["1.5", "NA", " 2.5 "]),
            Column::new("unemployment_rate".into(), &["4.0", "5.0", "N/A"]),
            Column::new("poverty_rate".into(), &[1.0, 2.0, 3.0]),
        ])
        .unwrap();
        let (dataset, report) = DataCleaner::clean(&df).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].gdp_growth, 1.5);
        assert_eq!(report.missing_in("gdp_growth"), Some(1));
        assert_eq!(report.missing_in("unemployment_rate"), Some(1));
    }
}
