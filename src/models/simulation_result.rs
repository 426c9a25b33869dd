//! Simulation result models for the Benefit Simulation Engine.
//!
//! This module contains the [`SimulationResult`] type and the audit structures
//! that record how every figure in a simulation was derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    BenefitCalculation, ClaimantProfile, ComplementaryAid, EligibilityVerdict, ProcedureStep,
    TimelineEvent,
};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// How urgently a warning needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational.
    Low,
    /// Should be reviewed.
    Medium,
    /// The figures are likely wrong.
    High,
}

/// A warning generated during a simulation.
///
/// Warnings flag questionable rules or inputs without stopping the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

/// The complete audit trace for a simulation.
///
/// # Example
///
/// ```
/// use benefit_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the simulation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of one simulation.
///
/// A result is created once per submission and never edited afterwards; a new
/// submission always produces a new, independent result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Unique identifier for this simulation.
    pub simulation_id: Uuid,
    /// When the simulation was performed.
    pub created_at: DateTime<Utc>,
    /// The version of the engine that performed the simulation.
    pub engine_version: String,
    /// The validated input.
    pub profile: ClaimantProfile,
    /// The eligibility verdict with its sub-conditions.
    pub eligibility: EligibilityVerdict,
    /// The computed allowance.
    pub calculation: BenefitCalculation,
    /// Complementary aids, one entry per aid kind.
    pub complementary_aids: Vec<ComplementaryAid>,
    /// The ordered administrative steps.
    pub procedure_steps: Vec<ProcedureStep>,
    /// Key dates, ordered by date.
    pub timeline: Vec<TimelineEvent>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
