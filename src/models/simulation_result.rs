//! Simulation result models for the Payslip Simulation Engine.
//!
//! This module contains the [`SimulationResult`] type and its associated
//! structures that capture all outputs from a salary decomposition,
//! including contribution lines, totals, cost shares, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single contribution line in a salary decomposition.
///
/// Each line captures the base the rate was applied to, the rate itself,
/// and the resulting amount.
///
/// # Example
///
/// ```
/// use payslip_engine::models::ContributionLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = ContributionLine {
///     code: "maladie".to_string(),
///     label: "Assurance maladie".to_string(),
///     base: Decimal::from_str("35000").unwrap(),
///     rate: Decimal::from_str("0.07").unwrap(),
///     amount: Decimal::from_str("2450").unwrap(),
///     deductible: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionLine {
    /// Stable identifier for the contribution (e.g., "csg_deductible").
    pub code: String,
    /// The human-readable name of the contribution.
    pub label: String,
    /// The amount the rate was applied to (gross salary or CSG base).
    pub base: Decimal,
    /// The flat rate applied to the base.
    pub rate: Decimal,
    /// The resulting contribution amount (base * rate).
    pub amount: Decimal,
    /// Whether this line is deductible from taxable income.
    /// Employer-side lines never are.
    pub deductible: bool,
}

/// Aggregated totals for a salary decomposition.
///
/// This struct provides every derived amount from gross salary down to
/// net pay after income tax and up to the total employer cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTotals {
    /// The gross annual salary the simulation was run for.
    pub gross_salary: Decimal,
    /// Sum of all employee-side contribution lines.
    pub employee_contributions: Decimal,
    /// Sum of all employer-side contribution lines.
    pub employer_contributions: Decimal,
    /// Gross salary minus employee contributions.
    pub net_before_tax: Decimal,
    /// Income subject to the progressive tax schedule.
    pub taxable_income: Decimal,
    /// Income tax owed under the progressive schedule.
    pub income_tax: Decimal,
    /// Net salary after income tax.
    pub net_after_tax: Decimal,
    /// Net salary after income tax, per month.
    pub monthly_net_after_tax: Decimal,
    /// Gross salary plus employer contributions.
    pub employer_cost: Decimal,
}

/// How the total employer cost splits between the employee's net pay,
/// social contributions, and income tax.
///
/// The three percentages sum to 100 (up to decimal division precision)
/// whenever the employer cost is non-zero; for a zero cost all three are
/// zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostShares {
    /// Net salary after tax, as a percentage of employer cost.
    pub net_pct: Decimal,
    /// Employee plus employer contributions, as a percentage of employer cost.
    pub contributions_pct: Decimal,
    /// Income tax, as a percentage of employer cost.
    pub tax_pct: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal article or schedule for this rule.
    pub reference: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during simulation.
///
/// Warnings indicate potential issues that don't prevent the simulation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a simulation.
///
/// Records every decision made during the decomposition for transparency.
///
/// # Example
///
/// ```
/// use payslip_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during simulation.
    pub warnings: Vec<AuditWarning>,
    /// The total simulation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary decomposition.
///
/// This struct captures all outputs from the simulation engine, including
/// contribution lines on both sides of the payslip, derived totals, cost
/// shares, and a complete audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Unique identifier for this simulation.
    pub simulation_id: Uuid,
    /// When the simulation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the simulation.
    pub engine_version: String,
    /// The code of the scheme the rates were taken from.
    pub scheme_code: String,
    /// The CSG/CRDS base (abated fraction of gross salary).
    pub csg_base: Decimal,
    /// Employee-side contribution lines.
    pub employee_lines: Vec<ContributionLine>,
    /// Employer-side contribution lines.
    pub employer_lines: Vec<ContributionLine>,
    /// Aggregated totals for the simulation.
    pub totals: SimulationTotals,
    /// Split of the employer cost between net pay, contributions, and tax.
    pub cost_shares: CostShares,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
