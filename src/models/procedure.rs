//! Procedure plan and timeline models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One administrative step the claimant must complete.
///
/// # Example
///
/// ```
/// use benefit_engine::models::ProcedureStep;
///
/// let step = ProcedureStep {
///     order: 1,
///     title: "Register as a jobseeker".to_string(),
///     description: "Create your jobseeker account online".to_string(),
///     deadline: "Within 72 hours".to_string(),
///     is_mandatory: true,
///     required_documents: vec!["Identity document".to_string()],
/// };
/// assert!(step.is_mandatory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureStep {
    /// Position in the plan, starting at 1.
    pub order: u32,
    /// Short title.
    pub title: String,
    /// What the claimant has to do.
    pub description: String,
    /// Human-readable deadline.
    pub deadline: String,
    /// Whether skipping the step forfeits the claim.
    pub is_mandatory: bool,
    /// Documents to bring or upload.
    pub required_documents: Vec<String>,
}

/// The milestone a timeline event marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    /// Deadline to register as a jobseeker.
    Registration,
    /// Expected date of the first allowance payment.
    FirstPayment,
    /// First monthly status renewal.
    FirstRenewal,
    /// Last day of the entitlement.
    EndOfEntitlement,
}

/// A dated milestone in the claimant's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// The projected date.
    pub date: NaiveDate,
    /// The milestone type.
    pub kind: TimelineEventKind,
    /// Human-readable label.
    pub label: String,
    /// Whether missing the date jeopardises payments.
    pub is_critical: bool,
}
