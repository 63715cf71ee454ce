//! Salary decomposition orchestration.
//!
//! This module ties the individual calculations together: CSG base,
//! contributions on both sides, taxable income, the progressive tax
//! schedule, and the final cost shares. Every simulation is recomputed
//! from scratch from its single input; nothing persists between calls.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::config::{RateConfig, SchemeMetadata};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, SimulationResult, SimulationTotals};

use super::cost_shares::calculate_cost_shares;
use super::csg_base::calculate_csg_base;
use super::employee_contributions::calculate_employee_contributions;
use super::employer_contributions::calculate_employer_contributions;
use super::income_tax::calculate_income_tax;
use super::taxable_income::calculate_taxable_income;

/// Months per year, for the monthly net figure.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Runs a full salary decomposition for a gross annual salary.
///
/// The simulation assumes a single filer without dependants, matching the
/// simplified schedule in the rate tables. The input must be non-negative;
/// range limits beyond that (such as UI slider bounds) are the caller's
/// concern.
///
/// # Arguments
///
/// * `gross_annual_salary` - The gross annual salary to decompose
/// * `scheme` - The scheme metadata (recorded on the result envelope)
/// * `rates` - The rate configuration effective for the simulation
///
/// # Returns
///
/// Returns a complete [`SimulationResult`], or `InvalidSalary` if the
/// salary is negative.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::calculation::simulate;
/// use payslip_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/fr2026")?;
/// let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
/// let rates = loader.rates_for(date)?;
///
/// let result = simulate(Decimal::from(35000), loader.scheme(), rates)?;
/// println!("Net after tax: {}", result.totals.net_after_tax);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn simulate(
    gross_annual_salary: Decimal,
    scheme: &SchemeMetadata,
    rates: &RateConfig,
) -> EngineResult<SimulationResult> {
    if gross_annual_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            message: format!("gross salary {} cannot be negative", gross_annual_salary),
        });
    }

    let start_time = Instant::now();
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // CSG/CRDS base
    let csg_base_result = calculate_csg_base(gross_annual_salary, rates.csg_base_rate, step_number);
    audit_steps.push(csg_base_result.audit_step);
    step_number += 1;

    // Employee-side contributions
    let employee_result = calculate_employee_contributions(
        gross_annual_salary,
        csg_base_result.base,
        &rates.employee,
        step_number,
    );
    audit_steps.push(employee_result.audit_step.clone());
    step_number += 1;

    // Employer-side contributions
    let employer_result =
        calculate_employer_contributions(gross_annual_salary, &rates.employer, step_number);
    audit_steps.push(employer_result.audit_step.clone());
    step_number += 1;

    // Taxable income after deductible contributions and the abatement
    let taxable_result = calculate_taxable_income(
        gross_annual_salary,
        employee_result.deductible_total,
        rates.taxable_abatement,
        step_number,
    );
    audit_steps.push(taxable_result.audit_step.clone());
    step_number += 1;

    // Progressive income tax
    let tax_result =
        calculate_income_tax(taxable_result.taxable_income, &rates.brackets, step_number);
    audit_steps.push(tax_result.audit_step.clone());
    step_number += 1;

    let net_before_tax = gross_annual_salary - employee_result.total;
    let net_after_tax = net_before_tax - tax_result.tax;
    let employer_cost = gross_annual_salary + employer_result.total;
    let total_contributions = employee_result.total + employer_result.total;

    // Cost shares, with the zero-cost guard
    let shares_result = calculate_cost_shares(
        net_after_tax,
        total_contributions,
        tax_result.tax,
        employer_cost,
        step_number,
    );
    audit_steps.push(shares_result.audit_step.clone());

    if employer_cost.is_zero() {
        warnings.push(AuditWarning {
            code: "ZERO_EMPLOYER_COST".to_string(),
            message: "Employer cost is zero; cost shares set to zero".to_string(),
            severity: "low".to_string(),
        });
    }

    let totals = SimulationTotals {
        gross_salary: gross_annual_salary,
        employee_contributions: employee_result.total,
        employer_contributions: employer_result.total,
        net_before_tax,
        taxable_income: taxable_result.taxable_income,
        income_tax: tax_result.tax,
        net_after_tax,
        monthly_net_after_tax: net_after_tax / MONTHS_PER_YEAR,
        employer_cost,
    };

    let duration = start_time.elapsed();

    info!(
        scheme = %scheme.code,
        gross_salary = %gross_annual_salary,
        net_after_tax = %totals.net_after_tax,
        employer_cost = %totals.employer_cost,
        duration_us = duration.as_micros() as u64,
        "Simulation completed"
    );

    Ok(SimulationResult {
        simulation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scheme_code: scheme.code.clone(),
        csg_base: csg_base_result.base,
        employee_lines: employee_result.lines,
        employer_lines: employer_result.lines,
        totals,
        cost_shares: shares_result.shares,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    })
}
