//! Progressive income tax calculation.
//!
//! This module walks the marginal bracket schedule: each bracket taxes
//! only the slice of income that falls inside it, so crossing a bracket
//! boundary never changes the tax on the income below it.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::AuditStep;

/// The tax computed for a single bracket of the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBracketLine {
    /// The exclusive lower bound of the bracket.
    pub lower_bound: Decimal,
    /// The inclusive upper bound, or `None` for the final bracket.
    pub upper_bound: Option<Decimal>,
    /// The slice of income taxed in this bracket.
    pub taxable_amount: Decimal,
    /// The marginal rate of the bracket.
    pub rate: Decimal,
    /// The tax owed for this bracket (taxable_amount * rate).
    pub tax: Decimal,
}

/// The result of an income tax calculation, including the per-bracket
/// breakdown and audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The total tax owed.
    pub tax: Decimal,
    /// One line per bracket that received income.
    pub bracket_lines: Vec<TaxBracketLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the income tax owed on a taxable income.
///
/// The schedule is walked in ascending bracket order. For each bracket the
/// amount taxed is `min(remaining income, bracket width)`; the walk stops
/// as soon as that amount is zero. Bracket intervals are half-open on the
/// left, `(previous_bound, upper_bound]`, so an income sitting exactly on
/// a boundary is taxed entirely at the lower bracket's rate.
///
/// No rounding is applied; rounding for display is the caller's concern.
///
/// # Arguments
///
/// * `taxable_income` - The income subject to the schedule (non-negative;
///   the simulation boundary validates this)
/// * `brackets` - The bracket schedule, validated at config load
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `IncomeTaxResult` with the total tax, the per-bracket
/// breakdown, and an audit step.
///
/// # Reference
///
/// Article 197 of the CGI defines the progressive schedule; the shipped
/// tables carry the 2026 brackets (2025 income).
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_income_tax;
/// use payslip_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     TaxBracket { upper_bound: Some(Decimal::from_str("11294").unwrap()), rate: Decimal::ZERO },
///     TaxBracket { upper_bound: None, rate: Decimal::from_str("0.11").unwrap() },
/// ];
///
/// let result = calculate_income_tax(Decimal::from_str("28797").unwrap(), &brackets, 1);
/// assert_eq!(result.tax, Decimal::from_str("1925.33").unwrap());
/// ```
pub fn calculate_income_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
    step_number: u32,
) -> IncomeTaxResult {
    let mut total = Decimal::ZERO;
    let mut remaining = taxable_income;
    let mut previous_bound = Decimal::ZERO;
    let mut bracket_lines = Vec::new();

    for bracket in brackets {
        let width = match bracket.upper_bound {
            Some(bound) => bound - previous_bound,
            None => remaining,
        };
        let taxable_amount = remaining.min(width);

        // Remaining income exhausted; higher brackets contribute nothing.
        if taxable_amount <= Decimal::ZERO {
            break;
        }

        let tax = taxable_amount * bracket.rate;
        total += tax;
        remaining -= taxable_amount;

        bracket_lines.push(TaxBracketLine {
            lower_bound: previous_bound,
            upper_bound: bracket.upper_bound,
            taxable_amount,
            rate: bracket.rate,
            tax,
        });

        if let Some(bound) = bracket.upper_bound {
            previous_bound = bound;
        }
    }

    let breakdown: Vec<serde_json::Value> = bracket_lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "lower_bound": line.lower_bound.normalize().to_string(),
                "upper_bound": line.upper_bound.map(|b| b.normalize().to_string()),
                "taxable_amount": line.taxable_amount.normalize().to_string(),
                "rate": line.rate.normalize().to_string(),
                "tax": line.tax.normalize().to_string(),
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax_schedule".to_string(),
        rule_name: "Progressive Income Tax".to_string(),
        reference: "CGI art. 197".to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string(),
        }),
        output: serde_json::json!({
            "tax": total.normalize().to_string(),
            "brackets_used": bracket_lines.len(),
            "breakdown": breakdown,
        }),
        reasoning: format!(
            "Taxable income {} spread over {} bracket(s), total tax {}",
            taxable_income.normalize(),
            bracket_lines.len(),
            total.normalize()
        ),
    };

    IncomeTaxResult {
        tax: total,
        bracket_lines,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// The 2026 schedule (2025 income) from the shipped rate tables.
    fn brackets_2026() -> Vec<TaxBracket> {
        vec![
            TaxBracket {
                upper_bound: Some(dec("11294")),
                rate: Decimal::ZERO,
            },
            TaxBracket {
                upper_bound: Some(dec("28797")),
                rate: dec("0.11"),
            },
            TaxBracket {
                upper_bound: Some(dec("82341")),
                rate: dec("0.30"),
            },
            TaxBracket {
                upper_bound: Some(dec("177106")),
                rate: dec("0.41"),
            },
            TaxBracket {
                upper_bound: None,
                rate: dec("0.45"),
            },
        ]
    }

    /// IT-001: zero income owes zero tax
    #[test]
    fn test_zero_income_owes_zero_tax() {
        let result = calculate_income_tax(Decimal::ZERO, &brackets_2026(), 1);

        assert_eq!(result.tax, Decimal::ZERO);
        assert!(result.bracket_lines.is_empty());
    }

    /// IT-002: income inside the zero-rate bracket owes zero tax
    #[test]
    fn test_income_within_first_bracket_owes_zero_tax() {
        let result = calculate_income_tax(dec("10000"), &brackets_2026(), 1);

        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.bracket_lines.len(), 1);
        assert_eq!(result.bracket_lines[0].taxable_amount, dec("10000"));
    }

    /// IT-003: income exactly at the first boundary is taxed at the lower rate
    #[test]
    fn test_income_at_first_boundary_owes_zero_tax() {
        let result = calculate_income_tax(dec("11294"), &brackets_2026(), 1);

        assert_eq!(result.tax, Decimal::ZERO);
        assert_eq!(result.bracket_lines.len(), 1);
    }

    /// IT-004: income at the second boundary taxes only the second slice
    #[test]
    fn test_income_at_second_boundary() {
        let result = calculate_income_tax(dec("28797"), &brackets_2026(), 1);

        // (28797 - 11294) * 0.11
        assert_eq!(result.tax, dec("1925.33"));
        assert_eq!(result.bracket_lines.len(), 2);
        assert_eq!(result.bracket_lines[1].taxable_amount, dec("17503"));
    }

    /// IT-005: income spanning three brackets
    #[test]
    fn test_income_spanning_three_brackets() {
        let result = calculate_income_tax(dec("50000"), &brackets_2026(), 1);

        // (28797 - 11294) * 0.11 + (50000 - 28797) * 0.30
        let expected = dec("17503") * dec("0.11") + dec("21203") * dec("0.30");
        assert_eq!(result.tax, expected);
        assert_eq!(result.bracket_lines.len(), 3);
    }

    /// IT-006: income in the unbounded top bracket
    #[test]
    fn test_income_in_top_bracket() {
        let result = calculate_income_tax(dec("200000"), &brackets_2026(), 1);

        let expected = dec("17503") * dec("0.11")
            + (dec("82341") - dec("28797")) * dec("0.30")
            + (dec("177106") - dec("82341")) * dec("0.41")
            + (dec("200000") - dec("177106")) * dec("0.45");
        assert_eq!(result.tax, expected);
        assert_eq!(result.bracket_lines.len(), 5);
        assert_eq!(result.bracket_lines[4].upper_bound, None);
    }

    /// IT-007: the marginal amount is continuous at a boundary
    #[test]
    fn test_continuity_at_bracket_boundary() {
        let brackets = brackets_2026();
        let epsilon = dec("0.01");

        let below = calculate_income_tax(dec("28797") - epsilon, &brackets, 1).tax;
        let at = calculate_income_tax(dec("28797"), &brackets, 1).tax;
        let above = calculate_income_tax(dec("28797") + epsilon, &brackets, 1).tax;

        assert_eq!(at - below, epsilon * dec("0.11"));
        assert_eq!(above - at, epsilon * dec("0.30"));
    }

    /// IT-008: tax is non-decreasing in income
    #[test]
    fn test_tax_is_non_decreasing() {
        let brackets = brackets_2026();
        let mut previous = Decimal::ZERO;

        for income in (0..200_000).step_by(7_919) {
            let tax = calculate_income_tax(Decimal::from(income), &brackets, 1).tax;
            assert!(
                tax >= previous,
                "tax decreased between incomes near {}",
                income
            );
            previous = tax;
        }
    }

    /// IT-009: the taxable base from the 35000 scenario
    #[test]
    fn test_scenario_taxable_base() {
        let result = calculate_income_tax(dec("26103.735"), &brackets_2026(), 1);

        // (26103.735 - 11294) * 0.11
        assert_eq!(result.tax, dec("1629.07085"));
    }

    #[test]
    fn test_bracket_lines_sum_to_income() {
        let income = dec("90000");
        let result = calculate_income_tax(income, &brackets_2026(), 1);

        let taxed: Decimal = result.bracket_lines.iter().map(|l| l.taxable_amount).sum();
        assert_eq!(taxed, income);
    }

    #[test]
    fn test_bracket_lines_sum_to_total_tax() {
        let result = calculate_income_tax(dec("123456.78"), &brackets_2026(), 1);

        let sum: Decimal = result.bracket_lines.iter().map(|l| l.tax).sum();
        assert_eq!(sum, result.tax);
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = calculate_income_tax(dec("35000"), &brackets_2026(), 5);

        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.rule_id, "income_tax_schedule");
        assert_eq!(result.audit_step.reference, "CGI art. 197");
    }

    #[test]
    fn test_audit_step_records_input_and_output() {
        let result = calculate_income_tax(dec("28797"), &brackets_2026(), 1);

        assert_eq!(
            result.audit_step.input["taxable_income"].as_str().unwrap(),
            "28797"
        );
        assert_eq!(result.audit_step.output["tax"].as_str().unwrap(), "1925.33");
        assert_eq!(
            result.audit_step.output["brackets_used"].as_u64().unwrap(),
            2
        );
    }

    #[test]
    fn test_single_unbounded_flat_bracket() {
        let brackets = vec![TaxBracket {
            upper_bound: None,
            rate: dec("0.20"),
        }];

        let result = calculate_income_tax(dec("1000"), &brackets, 1);
        assert_eq!(result.tax, dec("200"));
    }
}
