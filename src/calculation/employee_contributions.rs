//! Employee-side contribution calculation.
//!
//! Each employee contribution is a flat rate on either the gross salary or
//! the CSG/CRDS base. The deductible subtotal feeds the taxable income
//! calculation; the non-deductible CSG/CRDS line is excluded from it.

use rust_decimal::Decimal;

use crate::config::{ContributionBase, EmployeeContributionRate};
use crate::models::{AuditStep, ContributionLine};

/// The result of the employee contribution calculation.
#[derive(Debug, Clone)]
pub struct EmployeeContributionsResult {
    /// One line per configured employee contribution, in table order.
    pub lines: Vec<ContributionLine>,
    /// Sum of all line amounts.
    pub total: Decimal,
    /// Sum of the amounts flagged deductible from taxable income.
    pub deductible_total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates all employee-side contributions.
///
/// Each configured rate is applied to its base: the gross salary for
/// pension lines, the abated CSG base for the two CSG lines. Lines keep
/// the order of the rate table so the presentation layer can render the
/// payslip in its usual order.
///
/// # Arguments
///
/// * `gross_salary` - The gross annual salary
/// * `csg_base` - The abated CSG/CRDS base
/// * `rates` - The employee-side rate entries from the configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Reference
///
/// Article L241-1 of the Code de la sécurité sociale and following.
pub fn calculate_employee_contributions(
    gross_salary: Decimal,
    csg_base: Decimal,
    rates: &[EmployeeContributionRate],
    step_number: u32,
) -> EmployeeContributionsResult {
    let mut lines = Vec::with_capacity(rates.len());
    let mut total = Decimal::ZERO;
    let mut deductible_total = Decimal::ZERO;

    for entry in rates {
        let base = match entry.base {
            ContributionBase::Gross => gross_salary,
            ContributionBase::CsgAbated => csg_base,
        };
        let amount = base * entry.rate;

        total += amount;
        if entry.deductible {
            deductible_total += amount;
        }

        lines.push(ContributionLine {
            code: entry.code.clone(),
            label: entry.label.clone(),
            base,
            rate: entry.rate,
            amount,
            deductible: entry.deductible,
        });
    }

    let breakdown: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "code": line.code,
                "base": line.base.normalize().to_string(),
                "rate": line.rate.normalize().to_string(),
                "amount": line.amount.normalize().to_string(),
                "deductible": line.deductible,
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_contributions".to_string(),
        rule_name: "Employee Contributions".to_string(),
        reference: "CSS art. L241-1".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "csg_base": csg_base.normalize().to_string(),
            "rate_count": rates.len(),
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
            "deductible_total": deductible_total.normalize().to_string(),
            "breakdown": breakdown,
        }),
        reasoning: format!(
            "{} employee contribution(s) totalling {}, of which {} deductible",
            lines.len(),
            total.normalize(),
            deductible_total.normalize()
        ),
    };

    EmployeeContributionsResult {
        lines,
        total,
        deductible_total,
        audit_step,
    }
}
