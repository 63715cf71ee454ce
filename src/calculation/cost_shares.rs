//! Employer cost share calculation.
//!
//! The total employer cost splits three ways: what the employee keeps
//! after income tax, what goes to social contributions on both sides,
//! and what goes to income tax. The three percentages sum to 100 by
//! construction whenever the cost is non-zero.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CostShares};

/// The result of the cost share calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct CostSharesResult {
    /// The three percentages of employer cost.
    pub shares: CostShares,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the three shares of the total employer cost.
///
/// When the employer cost is zero (a zero gross salary), all three shares
/// are zero rather than undefined: the decomposition of nothing assigns
/// nothing to every party.
///
/// # Arguments
///
/// * `net_after_tax` - Net salary after income tax
/// * `total_contributions` - Employee plus employer contributions
/// * `income_tax` - Income tax owed
/// * `employer_cost` - Gross salary plus employer contributions
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_cost_shares;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_cost_shares(
///     Decimal::from_str("50").unwrap(),
///     Decimal::from_str("40").unwrap(),
///     Decimal::from_str("10").unwrap(),
///     Decimal::from_str("100").unwrap(),
///     1,
/// );
/// assert_eq!(result.shares.net_pct, Decimal::from_str("50").unwrap());
/// ```
pub fn calculate_cost_shares(
    net_after_tax: Decimal,
    total_contributions: Decimal,
    income_tax: Decimal,
    employer_cost: Decimal,
    step_number: u32,
) -> CostSharesResult {
    let hundred = Decimal::ONE_HUNDRED;

    let shares = if employer_cost.is_zero() {
        CostShares {
            net_pct: Decimal::ZERO,
            contributions_pct: Decimal::ZERO,
            tax_pct: Decimal::ZERO,
        }
    } else {
        CostShares {
            net_pct: net_after_tax / employer_cost * hundred,
            contributions_pct: total_contributions / employer_cost * hundred,
            tax_pct: income_tax / employer_cost * hundred,
        }
    };

    let reasoning = if employer_cost.is_zero() {
        "Employer cost is zero; all shares set to zero".to_string()
    } else {
        format!(
            "Of employer cost {}: net {}%, contributions {}%, tax {}%",
            employer_cost.normalize(),
            shares.net_pct.round_dp(2).normalize(),
            shares.contributions_pct.round_dp(2).normalize(),
            shares.tax_pct.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "cost_shares".to_string(),
        rule_name: "Employer Cost Shares".to_string(),
        reference: "decomposition".to_string(),
        input: serde_json::json!({
            "net_after_tax": net_after_tax.normalize().to_string(),
            "total_contributions": total_contributions.normalize().to_string(),
            "income_tax": income_tax.normalize().to_string(),
            "employer_cost": employer_cost.normalize().to_string(),
        }),
        output: serde_json::json!({
            "net_pct": shares.net_pct.normalize().to_string(),
            "contributions_pct": shares.contributions_pct.normalize().to_string(),
            "tax_pct": shares.tax_pct.normalize().to_string(),
        }),
        reasoning,
    };

    CostSharesResult { shares, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// CS-001: shares of a round decomposition
    #[test]
    fn test_round_decomposition() {
        let result = calculate_cost_shares(dec("50"), dec("40"), dec("10"), dec("100"), 1);

        assert_eq!(result.shares.net_pct, dec("50"));
        assert_eq!(result.shares.contributions_pct, dec("40"));
        assert_eq!(result.shares.tax_pct, dec("10"));
    }

    /// CS-002: shares sum to 100 when the parts cover the cost
    #[test]
    fn test_shares_sum_to_100() {
        // The 35000 scenario parts
        let result = calculate_cost_shares(
            dec("26377.84165"),
            dec("6993.0875") + dec("11364.5"),
            dec("1629.07085"),
            dec("46364.5"),
            1,
        );

        let sum =
            result.shares.net_pct + result.shares.contributions_pct + result.shares.tax_pct;
        assert!(
            (sum - Decimal::ONE_HUNDRED).abs() < dec("0.0000001"),
            "shares sum to {}",
            sum
        );
    }

    /// CS-003: zero employer cost gives zero shares, not NaN or a panic
    #[test]
    fn test_zero_cost_gives_zero_shares() {
        let result = calculate_cost_shares(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            1,
        );

        assert_eq!(result.shares.net_pct, Decimal::ZERO);
        assert_eq!(result.shares.contributions_pct, Decimal::ZERO);
        assert_eq!(result.shares.tax_pct, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("zero"));
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = calculate_cost_shares(dec("50"), dec("40"), dec("10"), dec("100"), 6);

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "cost_shares");
    }

    #[test]
    fn test_audit_output_records_percentages() {
        let result = calculate_cost_shares(dec("50"), dec("40"), dec("10"), dec("100"), 1);

        assert_eq!(result.audit_step.output["net_pct"].as_str().unwrap(), "50");
        assert_eq!(result.audit_step.output["tax_pct"].as_str().unwrap(), "10");
    }
}
