//! Typed Records
//! Cleaned rows of the indicator table and the numeric columns they carry.

use chrono::NaiveDate;
use serde::Serialize;

/// One cleaned row. Every field is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub country: String,
    pub date: NaiveDate,
    pub gdp_growth: f64,
    pub unemployment_rate: f64,
    pub poverty_rate: f64,
}

/// The three numeric indicator columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    GdpGrowth,
    UnemploymentRate,
    PovertyRate,
}

impl Indicator {
    /// All indicators in column order.
    pub const ALL: [Indicator; 3] = [
        Indicator::GdpGrowth,
        Indicator::UnemploymentRate,
        Indicator::PovertyRate,
    ];

    /// Column name in the input CSV.
    pub fn column_name(self) -> &'static str {
        match self {
            Indicator::GdpGrowth => "gdp_growth",
            Indicator::UnemploymentRate => "unemployment_rate",
            Indicator::PovertyRate => "poverty_rate",
        }
    }

    /// Human readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::GdpGrowth => "GDP Growth (%)",
            Indicator::UnemploymentRate => "Unemployment Rate (%)",
            Indicator::PovertyRate => "Poverty Rate (%)",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Indicator::GdpGrowth => record.gdp_growth,
            Indicator::UnemploymentRate => record.unemployment_rate,
            Indicator::PovertyRate => record.poverty_rate,
        }
    }
}

/// Ordered collection of cleaned records. Order follows the input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// Values of one indicator, in row order.
    pub fn values(&self, indicator: Indicator) -> Vec<f64> {
        self.records.iter().map(|r| indicator.value(r)).collect()
    }

    /// Sorted list of distinct countries.
    pub fn countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self.records.iter().map(|r| r.country.clone()).collect();
        countries.sort();
        countries.dedup();
        countries
    }
}
