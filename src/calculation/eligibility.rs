//! Eligibility evaluation functionality.
//!
//! A claimant qualifies when they worked long enough, did not resign, and
//! supplied a separation date. Each condition is kept so that a refusal can
//! be explained.

use crate::config::EligibilityRules;
use crate::models::{AuditStep, ClaimantProfile, EligibilityVerdict, SeparationReason};

/// Minimum months worked in the trailing window.
pub const MINIMUM_WORKED_MONTHS: u32 = 6;

/// The result of evaluating eligibility, including the audit step.
#[derive(Debug, Clone)]
pub struct EligibilityResult {
    /// The verdict and its sub-conditions.
    pub verdict: EligibilityVerdict,
    /// The audit step recording this evaluation.
    pub audit_step: AuditStep,
}

/// Returns true if the separation reason opens rights to the allowance.
pub fn reason_opens_rights(reason: SeparationReason) -> bool {
    match reason {
        SeparationReason::VoluntaryResignation => false,
        SeparationReason::EconomicDismissal
        | SeparationReason::DismissalWithCompensation
        | SeparationReason::EndOfFixedTerm
        | SeparationReason::MutualTermination
        | SeparationReason::EndOfTrialPeriod => true,
    }
}

/// Evaluates whether the claimant qualifies for the allowance.
///
/// `is_eligible = worked_months ≥ minimum ∧ reason ≠ voluntary_resignation ∧ separation_date present`.
/// Ineligibility is a normal outcome and never an error.
pub fn evaluate_eligibility(
    profile: &ClaimantProfile,
    rules: &EligibilityRules,
    step_number: u32,
) -> EligibilityResult {
    let verdict = EligibilityVerdict::from_conditions(
        profile.worked_months >= rules.minimum_worked_months,
        reason_opens_rights(profile.separation_reason),
        profile.separation_date.is_some(),
    );

    let reasoning = if verdict.is_eligible {
        format!(
            "{} worked months (minimum {}), separation by {} on a known date: eligible",
            profile.worked_months,
            rules.minimum_worked_months,
            profile.separation_reason.as_str()
        )
    } else {
        format!(
            "Not eligible: failed conditions {}",
            verdict.failed_conditions().join(", ")
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "eligibility".to_string(),
        rule_name: "Eligibility Gate".to_string(),
        input: serde_json::json!({
            "worked_months": profile.worked_months,
            "minimum_worked_months": rules.minimum_worked_months,
            "separation_reason": profile.separation_reason,
            "separation_date": profile.separation_date
        }),
        output: serde_json::json!({
            "is_eligible": verdict.is_eligible,
            "duration_met": verdict.duration_met,
            "reason_valid": verdict.reason_valid,
            "date_present": verdict.date_present
        }),
        reasoning,
    };

    EligibilityResult {
        verdict,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaritalStatus;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn create_profile(worked_months: u32, reason: SeparationReason) -> ClaimantProfile {
        ClaimantProfile {
            last_monthly_gross_salary: Decimal::from(2500),
            worked_months,
            age: 35,
            separation_reason: reason,
            separation_date: NaiveDate::from_ymd_opt(2026, 9, 30),
            dependent_children: 0,
            marital_status: MaritalStatus::Single,
            spouse_is_working: false,
            spouse_monthly_income: Decimal::ZERO,
        }
    }

    fn rules() -> EligibilityRules {
        EligibilityRules::default()
    }

    #[test]
    fn test_economic_dismissal_with_18_months_is_eligible() {
        let profile = create_profile(18, SeparationReason::EconomicDismissal);
        let result = evaluate_eligibility(&profile, &rules(), 1);

        assert!(result.verdict.is_eligible);
        assert!(result.audit_step.output["is_eligible"].as_bool().unwrap());
    }

    #[test]
    fn test_four_months_fails_duration() {
        let profile = create_profile(4, SeparationReason::EconomicDismissal);
        let result = evaluate_eligibility(&profile, &rules(), 1);

        assert!(!result.verdict.is_eligible);
        assert!(!result.verdict.duration_met);
        assert!(result.verdict.reason_valid);
        assert!(result.audit_step.reasoning.contains("worked_months"));
    }

    #[test]
    fn test_six_months_is_enough() {
        let profile = create_profile(6, SeparationReason::EndOfFixedTerm);
        assert!(evaluate_eligibility(&profile, &rules(), 1).verdict.is_eligible);
    }

    #[test]
    fn test_voluntary_resignation_fails_reason() {
        let profile = create_profile(18, SeparationReason::VoluntaryResignation);
        let result = evaluate_eligibility(&profile, &rules(), 1);

        assert!(!result.verdict.is_eligible);
        assert!(result.verdict.duration_met);
        assert!(!result.verdict.reason_valid);
    }

    #[test]
    fn test_missing_separation_date_fails() {
        let mut profile = create_profile(18, SeparationReason::EconomicDismissal);
        profile.separation_date = None;
        let result = evaluate_eligibility(&profile, &rules(), 1);

        assert!(!result.verdict.is_eligible);
        assert!(!result.verdict.date_present);
        assert!(result.audit_step.output["separation_date"].is_null());
    }

    #[test]
    fn test_only_resignation_closes_rights() {
        assert!(!reason_opens_rights(SeparationReason::VoluntaryResignation));
        assert!(reason_opens_rights(SeparationReason::MutualTermination));
        assert!(reason_opens_rights(SeparationReason::EndOfTrialPeriod));
        assert!(reason_opens_rights(SeparationReason::DismissalWithCompensation));
    }
}
