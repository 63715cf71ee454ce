//! Calculation modules for payslip simulation.
//!
//! Each module owns one step of the decomposition and returns its own
//! result struct together with an [`AuditStep`](crate::models::AuditStep).
//! The [`simulate`] orchestrator wires the steps together in order.

mod cost_shares;
mod csg_base;
mod employee_contributions;
mod employer_contributions;
mod income_tax;
mod simulation;
mod taxable_income;

pub use cost_shares::{calculate_cost_shares, CostSharesResult};
pub use csg_base::{calculate_csg_base, CsgBaseResult};
pub use employee_contributions::{calculate_employee_contributions, EmployeeContributionsResult};
pub use employer_contributions::{calculate_employer_contributions, EmployerContributionsResult};
pub use income_tax::{calculate_income_tax, IncomeTaxResult, TaxBracketLine};
pub use simulation::simulate;
pub use taxable_income::{calculate_taxable_income, TaxableIncomeResult};
