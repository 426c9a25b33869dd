//! Core data models for the Benefit Simulation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod aid;
mod benefit;
mod procedure;
mod profile;
mod simulation_result;
mod submission;

pub use aid::{AidKind, ComplementaryAid};
pub use benefit::{BenefitCalculation, EligibilityVerdict};
pub use procedure::{ProcedureStep, TimelineEvent, TimelineEventKind};
pub use profile::{ClaimantProfile, MaritalStatus, SeparationReason};
pub use simulation_result::{
    AuditStep, AuditTrace, AuditWarning, SimulationResult, WarningSeverity,
};
pub use submission::ProfileSubmission;
