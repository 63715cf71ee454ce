//! Employer-side contribution calculation.
//!
//! Employer contributions are all flat rates on the gross salary. They
//! never touch the employee's net pay or taxable income; they only raise
//! the total employer cost.

use rust_decimal::Decimal;

use crate::config::EmployerContributionRate;
use crate::models::{AuditStep, ContributionLine};

/// The result of the employer contribution calculation.
#[derive(Debug, Clone)]
pub struct EmployerContributionsResult {
    /// One line per configured employer contribution, in table order.
    pub lines: Vec<ContributionLine>,
    /// Sum of all line amounts.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates all employer-side contributions on the gross salary.
///
/// # Arguments
///
/// * `gross_salary` - The gross annual salary
/// * `rates` - The employer-side rate entries from the configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Reference
///
/// Article L241-2 of the Code de la sécurité sociale and following.
pub fn calculate_employer_contributions(
    gross_salary: Decimal,
    rates: &[EmployerContributionRate],
    step_number: u32,
) -> EmployerContributionsResult {
    let mut lines = Vec::with_capacity(rates.len());
    let mut total = Decimal::ZERO;

    for entry in rates {
        let amount = gross_salary * entry.rate;
        total += amount;

        lines.push(ContributionLine {
            code: entry.code.clone(),
            label: entry.label.clone(),
            base: gross_salary,
            rate: entry.rate,
            amount,
            deductible: false,
        });
    }

    let breakdown: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "code": line.code,
                "rate": line.rate.normalize().to_string(),
                "amount": line.amount.normalize().to_string(),
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "employer_contributions".to_string(),
        rule_name: "Employer Contributions".to_string(),
        reference: "CSS art. L241-2".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "rate_count": rates.len(),
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
            "breakdown": breakdown,
        }),
        reasoning: format!(
            "{} employer contribution(s) on gross {} totalling {}",
            lines.len(),
            gross_salary.normalize(),
            total.normalize()
        ),
    };

    EmployerContributionsResult {
        lines,
        total,
        audit_step,
    }
}
