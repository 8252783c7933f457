//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading mileage rate
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::rates::RateTable;

use super::types::{RateSource, RatesFile};

/// Loads a rate table from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/irs/
/// └── rates.yaml   # Source metadata and per-year cutoff schedules
/// ```
///
/// # Example
///
/// ```no_run
/// use mileage_ledger::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/irs")?;
/// let date = NaiveDate::from_ymd_opt(2022, 8, 1).unwrap();
/// println!("Rate: ${}", loader.rate_table().rate_for_date(date));
/// # Ok::<(), mileage_ledger::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: RateSource,
    table: RateTable,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::ConfigNotFound`] if `rates.yaml` is missing
    /// - [`TrackerError::ConfigParseError`] if it is not valid YAML for a rate file
    /// - [`TrackerError::InvalidSchedule`] if a schedule breaks the cutoff rules
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let path_str = rates_path.display().to_string();

        let content =
            fs::read_to_string(&rates_path).map_err(|_| TrackerError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            TrackerError::ConfigParseError { message, .. } => TrackerError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(
            path = %path_str,
            source = %loader.source.name,
            version = %loader.source.version,
            years = loader.table.years().count(),
            "Loaded mileage rate schedules"
        );

        Ok(loader)
    }

    /// Parses a rate file from a YAML string.
    pub fn from_yaml_str(content: &str) -> TrackerResult<Self> {
        let file: RatesFile =
            serde_yaml::from_str(content).map_err(|e| TrackerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        let source = file.source.clone();
        let table = file.into_table()?;

        Ok(Self { source, table })
    }

    /// Returns where the loaded rates come from.
    pub fn source(&self) -> &RateSource {
        &self.source
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.table
    }

    /// Consumes the loader and returns the rate table.
    pub fn into_rate_table(self) -> RateTable {
        self.table
    }
}
