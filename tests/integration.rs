//! Integration tests for the payslip simulation engine.
//!
//! These tests exercise the full pipeline: loading the shipped fr2026
//! configuration from disk and running complete simulations through it.

use chrono::NaiveDate;
use payslip_engine::calculation::simulate;
use payslip_engine::config::ConfigLoader;
use payslip_engine::error::EngineError;
use payslip_engine::models::SimulationResult;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn run(gross: &str) -> SimulationResult {
    let loader = ConfigLoader::load("./config/fr2026").expect("config should load");
    let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let rates = loader.rates_for(date).expect("rates should exist for 2026");

    simulate(dec(gross), loader.scheme(), rates).expect("simulation should succeed")
}

/// INT-001: the reference scenario, gross 35000, end to end
#[test]
fn test_full_simulation_35000() {
    let result = run("35000");

    assert_eq!(result.scheme_code, "fr2026");
    assert_eq!(result.csg_base, dec("34387.5"));

    assert_eq!(result.employee_lines.len(), 5);
    assert_eq!(result.employer_lines.len(), 8);

    assert_eq!(result.totals.gross_salary, dec("35000"));
    assert_eq!(result.totals.employee_contributions, dec("6993.0875"));
    assert_eq!(result.totals.net_before_tax, dec("28006.9125"));
    assert_eq!(result.totals.taxable_income, dec("26103.735"));
    assert_eq!(result.totals.income_tax, dec("1629.07085"));
    assert_eq!(result.totals.net_after_tax, dec("26377.84165"));
    assert_eq!(result.totals.employer_contributions, dec("11364.5"));
    assert_eq!(result.totals.employer_cost, dec("46364.5"));
}

/// INT-002: an income inside the first bracket pays no tax
#[test]
fn test_low_income_pays_no_tax() {
    let result = run("12000");

    // Taxable income lands well below the 11294 threshold
    assert!(result.totals.taxable_income < dec("11294"));
    assert_eq!(result.totals.income_tax, Decimal::ZERO);
    assert_eq!(result.totals.net_after_tax, result.totals.net_before_tax);
}

/// INT-003: the slider bounds of the original simulator both simulate cleanly
#[test]
fn test_simulator_range_bounds() {
    for gross in ["15000", "150000"] {
        let result = run(gross);

        assert!(result.totals.net_after_tax > Decimal::ZERO);
        assert!(result.totals.employer_cost > dec(gross));
        assert_eq!(
            result.totals.employee_contributions + result.totals.net_before_tax,
            dec(gross)
        );
    }
}

/// INT-004: a zero salary decomposes to zero with a warning, no division error
#[test]
fn test_zero_salary_end_to_end() {
    let result = run("0");

    assert_eq!(result.totals.employer_cost, Decimal::ZERO);
    assert_eq!(result.cost_shares.net_pct, Decimal::ZERO);
    assert_eq!(result.cost_shares.contributions_pct, Decimal::ZERO);
    assert_eq!(result.cost_shares.tax_pct, Decimal::ZERO);
    assert_eq!(result.audit_trace.warnings.len(), 1);
    assert_eq!(result.audit_trace.warnings[0].code, "ZERO_EMPLOYER_COST");
}

/// INT-005: the three cost shares always sum to 100 for positive salaries
#[test]
fn test_cost_shares_sum_to_100() {
    for gross in ["15000", "35000", "60000", "100000", "150000"] {
        let result = run(gross);

        let sum = result.cost_shares.net_pct
            + result.cost_shares.contributions_pct
            + result.cost_shares.tax_pct;
        assert!(
            (sum - Decimal::ONE_HUNDRED).abs() < dec("0.0000001"),
            "shares for gross {} sum to {}",
            gross,
            sum
        );
    }
}

/// INT-006: the audit trace covers the whole pipeline in order
#[test]
fn test_audit_trace_is_complete_and_ordered() {
    let result = run("35000");

    assert_eq!(result.audit_trace.steps.len(), 6);
    for (index, step) in result.audit_trace.steps.iter().enumerate() {
        assert_eq!(step.step_number, index as u32 + 1);
        assert!(!step.rule_id.is_empty());
        assert!(!step.reasoning.is_empty());
    }
    assert!(result.audit_trace.warnings.is_empty());
}

/// INT-007: results serialize to JSON and come back identical
#[test]
fn test_result_round_trips_through_json() {
    let result = run("35000");

    let json = serde_json::to_string(&result).expect("result should serialize");
    let back: SimulationResult = serde_json::from_str(&json).expect("result should deserialize");

    assert_eq!(back, result);
}

/// INT-008: a negative salary is rejected before any calculation runs
#[test]
fn test_negative_salary_is_rejected() {
    let loader = ConfigLoader::load("./config/fr2026").unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let rates = loader.rates_for(date).unwrap();

    let result = simulate(dec("-35000"), loader.scheme(), rates);

    assert!(matches!(result, Err(EngineError::InvalidSalary { .. })));
}

/// INT-009: asking for rates before any effective date fails cleanly
#[test]
fn test_rates_unavailable_before_first_effective_date() {
    let loader = ConfigLoader::load("./config/fr2026").unwrap();
    let date = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();

    let result = loader.rates_for(date);

    assert!(matches!(result, Err(EngineError::RatesNotFound { .. })));
}

/// INT-010: tax boundary behaviour survives the full pipeline
#[test]
fn test_tax_grows_with_gross_salary() {
    let mut previous_tax = Decimal::ZERO;
    let mut previous_net = Decimal::ZERO;

    for gross in ["15000", "25000", "35000", "50000", "90000", "150000"] {
        let result = run(gross);

        assert!(
            result.totals.income_tax >= previous_tax,
            "tax decreased at gross {}",
            gross
        );
        assert!(
            result.totals.net_after_tax > previous_net,
            "net decreased at gross {}",
            gross
        );
        previous_tax = result.totals.income_tax;
        previous_net = result.totals.net_after_tax;
    }
}
