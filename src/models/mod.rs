//! Core data models for the Payslip Simulation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod simulation_result;

pub use simulation_result::{
    AuditStep, AuditTrace, AuditWarning, ContributionLine, CostShares, SimulationResult,
    SimulationTotals,
};
