//! Procedure plan generation.
//!
//! The plan always holds the three base steps. An ineligible claimant gets an
//! alternative-track step in front of them, and a resignation adds a review
//! request at the end.

use crate::config::ScheduleRules;
use crate::models::{AuditStep, ClaimantProfile, EligibilityVerdict, ProcedureStep, SeparationReason};

/// The result of generating the procedure plan, including the audit step.
#[derive(Debug, Clone)]
pub struct ProcedurePlanResult {
    /// Steps ordered from 1 without gaps.
    pub steps: Vec<ProcedureStep>,
    /// The audit step recording this generation.
    pub audit_step: AuditStep,
}

fn documents(items: &[&str]) -> Vec<String> {
    items.iter().map(|d| (*d).to_string()).collect()
}

fn base_steps(rules: &ScheduleRules) -> Vec<ProcedureStep> {
    vec![
        ProcedureStep {
            order: 0,
            title: "Register as a jobseeker".to_string(),
            description: "Create a jobseeker account and file the allowance claim".to_string(),
            deadline: format!("Within {} hours", rules.registration_deadline_hours),
            is_mandatory: true,
            required_documents: documents(&[
                "Identity document",
                "Employer termination certificate",
                "Bank account details",
                "Social security number",
            ]),
        },
        ProcedureStep {
            order: 0,
            title: "Attend the intake interview".to_string(),
            description: "Meet an adviser to set up the personalised return-to-work plan"
                .to_string(),
            deadline: format!("Within {} days", rules.intake_interview_days),
            is_mandatory: true,
            required_documents: documents(&["Up-to-date CV", "Diplomas and training certificates"]),
        },
        ProcedureStep {
            order: 0,
            title: "Renew your status every month".to_string(),
            description: "Declare your situation each month to keep receiving payments"
                .to_string(),
            deadline: "Monthly".to_string(),
            is_mandatory: true,
            required_documents: documents(&["Payslips for any work done during the month"]),
        },
    ]
}

fn alternative_track_step(verdict: &EligibilityVerdict) -> ProcedureStep {
    ProcedureStep {
        order: 0,
        title: "Check eligibility for minimum income or local aid".to_string(),
        description: format!(
            "The allowance conditions are not met ({}); apply for the means-tested \
             minimum income or ask your local social services about municipal aid",
            verdict.failed_conditions().join(", ")
        ),
        deadline: "As soon as possible".to_string(),
        is_mandatory: false,
        required_documents: documents(&["Proof of household income", "Proof of address"]),
    }
}

fn resignation_review_step(rules: &ScheduleRules) -> ProcedureStep {
    ProcedureStep {
        order: 0,
        title: "Request a legitimate-resignation review".to_string(),
        description: "A resignation can still open rights if it was forced by the working \
                      conditions; submit the evidence to the review board"
            .to_string(),
        deadline: format!("Within {} days", rules.resignation_review_days),
        is_mandatory: false,
        required_documents: documents(&[
            "Evidence of harassment",
            "Medical certificate",
            "Correspondence with the employer",
        ]),
    }
}

/// Generates the ordered list of administrative steps.
///
/// Base steps are registration, intake interview and monthly renewal.
/// Ineligibility prepends an alternative-track step naming the failed
/// conditions; a voluntary resignation appends the legitimate-resignation
/// review. Orders are then numbered from 1.
pub fn generate_procedure_plan(
    profile: &ClaimantProfile,
    verdict: &EligibilityVerdict,
    rules: &ScheduleRules,
    step_number: u32,
) -> ProcedurePlanResult {
    let mut steps = Vec::with_capacity(5);
    let mut extensions = Vec::new();

    if !verdict.is_eligible {
        steps.push(alternative_track_step(verdict));
        extensions.push("alternative_track");
    }

    steps.extend(base_steps(rules));

    if profile.separation_reason == SeparationReason::VoluntaryResignation {
        steps.push(resignation_review_step(rules));
        extensions.push("resignation_review");
    }

    for (index, step) in steps.iter_mut().enumerate() {
        step.order = index as u32 + 1;
    }

    let reasoning = if extensions.is_empty() {
        format!("{} base steps", steps.len())
    } else {
        format!(
            "{} steps including extensions: {}",
            steps.len(),
            extensions.join(", ")
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "procedure_plan".to_string(),
        rule_name: "Procedure Plan".to_string(),
        input: serde_json::json!({
            "is_eligible": verdict.is_eligible,
            "separation_reason": profile.separation_reason
        }),
        output: serde_json::json!({
            "steps": steps.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            "extensions": extensions
        }),
        reasoning,
    };

    ProcedurePlanResult { steps, audit_step }
}
