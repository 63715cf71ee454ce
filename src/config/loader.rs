//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheme
//! rate tables from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{RateConfig, SchemeConfig, SchemeMetadata};

/// Loads and provides access to a scheme configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates the tables, and provides lookups by effective date.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fr2026/
/// ├── scheme.yaml          # Scheme metadata
/// └── rates/
///     └── 2026-01-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/fr2026").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let rates = loader.rates_for(date).unwrap();
/// println!("Brackets: {}", rates.brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fr2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate table violates its invariants (bracket ordering, final
    ///   unbounded bracket, rates outside [0, 1])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payslip_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/fr2026")?;
    /// # Ok::<(), payslip_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load scheme.yaml
        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        // Load all rate files from the rates directory
        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        info!(
            scheme = %metadata.code,
            rate_configs = rates.len(),
            "Loaded scheme configuration"
        );

        let config = SchemeConfig::new(metadata, rates);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rate_config = Self::load_yaml::<RateConfig>(&path)?;
                validate_rate_config(&path.display().to_string(), &rate_config)?;
                rates.push(rate_config);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Gets the rate configuration effective on a given date.
    ///
    /// The method finds the most recent rate configuration that is effective
    /// on or before the given date.
    ///
    /// # Arguments
    ///
    /// * `date` - The date for which to get the rates
    ///
    /// # Returns
    ///
    /// Returns the rate configuration if found, or `RatesNotFound` if no
    /// configuration is effective for the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payslip_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/fr2026")?;
    /// let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    /// let rates = loader.rates_for(date)?;
    /// println!("CSG base rate: {}", rates.csg_base_rate);
    /// # Ok::<(), payslip_engine::error::EngineError>(())
    /// ```
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&RateConfig> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .ok_or(EngineError::RatesNotFound { date })
    }
}

/// Checks that a fraction lies within [0, 1].
fn is_unit_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

/// Validates the invariants of a rate configuration.
///
/// Brackets must be non-empty, strictly increasing, and end with an
/// unbounded bracket; every rate and abatement fraction must lie in [0, 1].
fn validate_rate_config(path: &str, config: &RateConfig) -> EngineResult<()> {
    if !is_unit_fraction(config.csg_base_rate) {
        return Err(EngineError::ConfigParseError {
            path: path.to_string(),
            message: format!("csg_base_rate {} must be within [0, 1]", config.csg_base_rate),
        });
    }

    if !is_unit_fraction(config.taxable_abatement) {
        return Err(EngineError::ConfigParseError {
            path: path.to_string(),
            message: format!(
                "taxable_abatement {} must be within [0, 1]",
                config.taxable_abatement
            ),
        });
    }

    validate_brackets(path, config)?;

    for entry in &config.employee {
        if !is_unit_fraction(entry.rate) {
            return Err(EngineError::InvalidContributionRate {
                code: entry.code.clone(),
                message: format!("rate {} must be within [0, 1]", entry.rate),
            });
        }
    }

    for entry in &config.employer {
        if !is_unit_fraction(entry.rate) {
            return Err(EngineError::InvalidContributionRate {
                code: entry.code.clone(),
                message: format!("rate {} must be within [0, 1]", entry.rate),
            });
        }
    }

    Ok(())
}

/// Validates the bracket table of a rate configuration.
fn validate_brackets(path: &str, config: &RateConfig) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidBracketTable {
        path: path.to_string(),
        message,
    };

    if config.brackets.is_empty() {
        return Err(invalid("bracket table is empty".to_string()));
    }

    let mut previous_bound = Decimal::ZERO;

    for (index, bracket) in config.brackets.iter().enumerate() {
        if !is_unit_fraction(bracket.rate) {
            return Err(invalid(format!(
                "bracket {} rate {} must be within [0, 1]",
                index, bracket.rate
            )));
        }

        let is_last = index == config.brackets.len() - 1;
        match bracket.upper_bound {
            Some(bound) if is_last => {
                return Err(invalid(format!(
                    "final bracket must be unbounded, found upper bound {}",
                    bound
                )));
            }
            Some(bound) => {
                if bound <= previous_bound {
                    return Err(invalid(format!(
                        "bracket upper bounds must be strictly increasing ({} after {})",
                        bound, previous_bound
                    )));
                }
                previous_bound = bound;
            }
            None if is_last => {}
            None => {
                return Err(invalid(format!(
                    "only the final bracket may be unbounded (bracket {})",
                    index
                )));
            }
        }
    }

    Ok(())
}
