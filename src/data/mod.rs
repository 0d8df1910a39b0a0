//! Data module - CSV loading, cleaning and the typed record model

mod cleaner;
mod dataset;
mod loader;

pub use cleaner::{CleanerError, ColumnMissing, DataCleaner, MissingReport};
pub use dataset::{Dataset, Indicator, Record};
pub use loader::{DataLoader, LoaderError, MISSING_TOKENS, REQUIRED_COLUMNS};
