//! Configuration types for payslip simulation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML rate-table files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the contribution and tax scheme.
///
/// Contains identifying information about the scheme the rate tables
/// describe, including its code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// The scheme code (e.g., "fr2026").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version or effective year of the scheme.
    pub version: String,
    /// URL to the official documentation the rates were taken from.
    pub source_url: String,
}

/// A single bracket of the progressive income tax schedule.
///
/// Brackets partition the non-negative income line into contiguous
/// intervals; each bracket taxes only the income falling inside it
/// (marginal rates). The final bracket has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The inclusive upper bound of the bracket, or `None` for the
    /// unbounded final bracket.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied to income within this bracket.
    pub rate: Decimal,
}

/// The base a contribution rate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionBase {
    /// The full gross salary.
    Gross,
    /// The CSG/CRDS base (gross salary reduced by the CSG abatement).
    CsgAbated,
}

/// An employee-side contribution rate entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeContributionRate {
    /// Stable identifier for the contribution (e.g., "csg_deductible").
    pub code: String,
    /// The human-readable name of the contribution.
    pub label: String,
    /// The flat rate applied to the contribution base.
    pub rate: Decimal,
    /// Which base the rate applies to.
    pub base: ContributionBase,
    /// Whether the contribution is deductible from taxable income.
    pub deductible: bool,
}

/// An employer-side contribution rate entry.
///
/// Employer contributions are always levied on the full gross salary and
/// never interact with the employee's taxable income.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerContributionRate {
    /// Stable identifier for the contribution (e.g., "maladie").
    pub code: String,
    /// The human-readable name of the contribution.
    pub label: String,
    /// The flat rate applied to the gross salary.
    pub rate: Decimal,
}

/// Rate configuration for a specific effective date.
///
/// One instance corresponds to one file under `rates/` and holds every
/// table needed to decompose a salary: the income tax brackets, the two
/// fixed abatement fractions, and both contribution rate lists.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The effective date for these rates.
    pub effective_date: NaiveDate,
    /// Fraction of gross salary forming the CSG/CRDS base (e.g., 0.9825).
    pub csg_base_rate: Decimal,
    /// Flat abatement applied to taxable income (e.g., 0.10).
    pub taxable_abatement: Decimal,
    /// Ordered income tax brackets, lowest first, final bracket unbounded.
    pub brackets: Vec<TaxBracket>,
    /// Employee-side contribution rates.
    pub employee: Vec<EmployeeContributionRate>,
    /// Employer-side contribution rates.
    pub employer: Vec<EmployerContributionRate>,
}

/// The complete scheme configuration loaded from YAML files.
///
/// This struct aggregates the scheme metadata and every rate configuration
/// found in a configuration directory.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(metadata: SchemeMetadata, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all rate configurations.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }
}
