//! Configuration loading and management for the Payslip Simulation Engine.
//!
//! This module provides functionality to load scheme configurations from
//! YAML files, including scheme metadata, income tax brackets, and
//! contribution rate tables.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fr2026").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionBase, EmployeeContributionRate, EmployerContributionRate, RateConfig,
    SchemeConfig, SchemeMetadata, TaxBracket,
};
