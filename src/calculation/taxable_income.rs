//! Taxable income calculation.
//!
//! The income subject to the progressive schedule is the gross salary
//! minus the deductible contributions, reduced by the flat abatement
//! (10% under the shipped 2026 tables).

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the taxable income calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxableIncomeResult {
    /// The income subject to the progressive tax schedule.
    pub taxable_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the taxable income from the gross salary.
///
/// The formula is `(gross_salary - deductible_contributions) * (1 - abatement)`.
/// The deductible contributions are the employee pension lines plus the
/// deductible CSG line; the non-deductible CSG/CRDS line stays in the base.
///
/// # Arguments
///
/// * `gross_salary` - The gross annual salary
/// * `deductible_contributions` - The deductible employee subtotal
/// * `taxable_abatement` - The flat abatement fraction (0.10 for 2026)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Reference
///
/// Article 83 of the CGI (deductible contributions) and the 10% abatement
/// of article 83-3°.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_taxable_income;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_taxable_income(
///     Decimal::from_str("35000").unwrap(),
///     Decimal::from_str("5995.85").unwrap(),
///     Decimal::from_str("0.10").unwrap(),
///     1,
/// );
/// assert_eq!(result.taxable_income, Decimal::from_str("26103.735").unwrap());
/// ```
pub fn calculate_taxable_income(
    gross_salary: Decimal,
    deductible_contributions: Decimal,
    taxable_abatement: Decimal,
    step_number: u32,
) -> TaxableIncomeResult {
    let net_taxable = gross_salary - deductible_contributions;
    let taxable_income = net_taxable * (Decimal::ONE - taxable_abatement);

    let audit_step = AuditStep {
        step_number,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        reference: "CGI art. 83".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "deductible_contributions": deductible_contributions.normalize().to_string(),
            "taxable_abatement": taxable_abatement.normalize().to_string(),
        }),
        output: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
        }),
        reasoning: format!(
            "({} - {}) x (1 - {}) = {}",
            gross_salary.normalize(),
            deductible_contributions.normalize(),
            taxable_abatement.normalize(),
            taxable_income.normalize()
        ),
    };

    TaxableIncomeResult {
        taxable_income,
        audit_step,
    }
}
