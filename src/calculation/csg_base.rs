//! CSG/CRDS base calculation.
//!
//! The generalized social contributions (CSG and CRDS) are not levied on
//! the full gross salary but on an abated base, 98.25% of gross under the
//! shipped 2026 tables.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the CSG/CRDS base calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CsgBaseResult {
    /// The abated base the CSG/CRDS rates apply to.
    pub base: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the CSG/CRDS base from the gross salary.
///
/// The base is `gross_salary * csg_base_rate`, where the rate is the
/// abated fraction from the rate configuration (0.9825 for 2026).
///
/// # Arguments
///
/// * `gross_salary` - The gross annual salary
/// * `csg_base_rate` - The abated fraction from the rate configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Reference
///
/// Article L136-8 of the Code de la sécurité sociale.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_csg_base;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_csg_base(
///     Decimal::from_str("35000").unwrap(),
///     Decimal::from_str("0.9825").unwrap(),
///     1,
/// );
/// assert_eq!(result.base, Decimal::from_str("34387.5").unwrap());
/// ```
pub fn calculate_csg_base(
    gross_salary: Decimal,
    csg_base_rate: Decimal,
    step_number: u32,
) -> CsgBaseResult {
    let base = gross_salary * csg_base_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "csg_base".to_string(),
        rule_name: "CSG/CRDS Base".to_string(),
        reference: "CSS art. L136-8".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string(),
            "csg_base_rate": csg_base_rate.normalize().to_string(),
        }),
        output: serde_json::json!({
            "csg_base": base.normalize().to_string(),
        }),
        reasoning: format!(
            "{} x {} = {}",
            gross_salary.normalize(),
            csg_base_rate.normalize(),
            base.normalize()
        ),
    };

    CsgBaseResult { base, audit_step }
}
