//! COVID-19 Economic Impact Analysis
//!
//! Loads country-level economic indicators from CSV, cleans them, renders
//! trend and correlation charts, and fits a linear regression of GDP
//! growth on unemployment and poverty rates.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod gui;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;
