//! Payslip Simulation Engine for French payroll
//!
//! This crate decomposes a gross annual salary under the simplified 2026
//! French rules: social contributions on both sides of the payslip, the
//! progressive income tax schedule, and the resulting net pay and total
//! employer cost.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
