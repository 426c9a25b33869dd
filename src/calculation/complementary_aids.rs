//! Complementary aid estimation.
//!
//! Each aid is evaluated from the claimant profile alone, independently of
//! the main allowance and of the other aids.

use rust_decimal::Decimal;

use crate::config::AidRules;
use crate::models::{AidKind, AuditStep, ClaimantProfile, ComplementaryAid};

/// Minimum income base for a single person (635.71).
pub const MINIMUM_INCOME_SINGLE: Decimal = Decimal::from_parts(63571, 0, 0, false, 2);

/// Minimum income base for a couple (953.56).
pub const MINIMUM_INCOME_COUPLE: Decimal = Decimal::from_parts(95356, 0, 0, false, 2);

/// Minimum income supplement per dependent child (211.9).
pub const MINIMUM_INCOME_PER_CHILD: Decimal = Decimal::from_parts(2119, 0, 0, false, 1);

/// Flat activity bonus for households with children (159.4).
pub const ACTIVITY_BONUS: Decimal = Decimal::from_parts(1594, 0, 0, false, 1);

/// School-term allowance per dependent child (416.4).
pub const SCHOOL_ALLOWANCE_PER_CHILD: Decimal = Decimal::from_parts(4164, 0, 0, false, 1);

/// Flat mobility aid (150).
pub const MOBILITY_AID: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Flat end-of-training stipend (652.02).
pub const TRAINING_STIPEND: Decimal = Decimal::from_parts(65202, 0, 0, false, 2);

/// The result of estimating complementary aids, including the audit step.
#[derive(Debug, Clone)]
pub struct ComplementaryAidsResult {
    /// One entry per aid kind.
    pub aids: Vec<ComplementaryAid>,
    /// The audit step recording this estimation.
    pub audit_step: AuditStep,
}

fn minimum_income(profile: &ClaimantProfile, rules: &AidRules) -> ComplementaryAid {
    let (base, household) = if profile.marital_status.is_couple() {
        (rules.minimum_income_couple, "couple")
    } else {
        (rules.minimum_income_single, "single person")
    };
    let amount = base + rules.minimum_income_per_child * Decimal::from(profile.dependent_children);

    ComplementaryAid {
        kind: AidKind::MinimumIncome,
        name: "Means-tested minimum income".to_string(),
        amount: Some(amount),
        is_eligible: true,
        notes: format!(
            "Base €{} for a {} plus €{} per dependent child ({})",
            base.normalize(),
            household,
            rules.minimum_income_per_child.normalize(),
            profile.dependent_children
        ),
    }
}

fn activity_bonus(profile: &ClaimantProfile, rules: &AidRules) -> ComplementaryAid {
    let is_eligible = profile.has_dependents();
    ComplementaryAid {
        kind: AidKind::ActivityBonus,
        name: "Activity bonus".to_string(),
        amount: Some(if is_eligible {
            rules.activity_bonus
        } else {
            Decimal::ZERO
        }),
        is_eligible,
        notes: if is_eligible {
            "Flat monthly bonus for households with dependent children".to_string()
        } else {
            "Requires at least one dependent child".to_string()
        },
    }
}

fn school_allowance(profile: &ClaimantProfile, rules: &AidRules) -> ComplementaryAid {
    ComplementaryAid {
        kind: AidKind::SchoolAllowance,
        name: "School-term allowance".to_string(),
        amount: Some(rules.school_allowance_per_child * Decimal::from(profile.dependent_children)),
        is_eligible: profile.has_dependents(),
        notes: format!(
            "€{} per dependent child, paid at the start of the school year",
            rules.school_allowance_per_child.normalize()
        ),
    }
}

fn mobility_aid(rules: &AidRules) -> ComplementaryAid {
    ComplementaryAid {
        kind: AidKind::MobilityAid,
        name: "Mobility aid".to_string(),
        amount: Some(rules.mobility_aid),
        is_eligible: true,
        notes: "Covers travel to interviews and training".to_string(),
    }
}

fn training_stipend(rules: &AidRules) -> ComplementaryAid {
    ComplementaryAid {
        kind: AidKind::TrainingStipend,
        name: "End-of-training stipend".to_string(),
        amount: Some(rules.training_stipend),
        is_eligible: true,
        notes: "Paid when a training course outlasts the allowance".to_string(),
    }
}

fn health_coverage(rules: &AidRules) -> ComplementaryAid {
    ComplementaryAid {
        kind: AidKind::HealthCoverage,
        name: "Continued health coverage".to_string(),
        amount: None,
        is_eligible: true,
        notes: format!(
            "Employer health coverage maintained for {} months",
            rules.health_coverage_months
        ),
    }
}

/// Estimates every complementary aid for a claimant.
///
/// - Minimum income: single or couple base plus a per-child supplement; always eligible.
/// - Activity bonus: flat amount if there is at least one dependent child.
/// - School-term allowance: per-child amount; eligible with at least one child.
/// - Mobility aid and end-of-training stipend: flat, always eligible.
/// - Health coverage: maintained, with no amount.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::estimate_complementary_aids;
/// use benefit_engine::config::AidRules;
/// use benefit_engine::models::{AidKind, ClaimantProfile, MaritalStatus, SeparationReason};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let profile = ClaimantProfile {
///     last_monthly_gross_salary: Decimal::from(2500),
///     worked_months: 18,
///     age: 35,
///     separation_reason: SeparationReason::EconomicDismissal,
///     separation_date: None,
///     dependent_children: 2,
///     marital_status: MaritalStatus::Married,
///     spouse_is_working: false,
///     spouse_monthly_income: Decimal::ZERO,
/// };
///
/// let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);
/// let minimum_income = result.aids.iter().find(|a| a.kind == AidKind::MinimumIncome).unwrap();
/// assert_eq!(minimum_income.amount, Some(Decimal::from_str("1377.36").unwrap()));
/// ```
pub fn estimate_complementary_aids(
    profile: &ClaimantProfile,
    rules: &AidRules,
    step_number: u32,
) -> ComplementaryAidsResult {
    let aids = vec![
        minimum_income(profile, rules),
        activity_bonus(profile, rules),
        school_allowance(profile, rules),
        mobility_aid(rules),
        training_stipend(rules),
        health_coverage(rules),
    ];

    let eligible_total: Decimal = aids
        .iter()
        .filter(|a| a.is_eligible)
        .filter_map(|a| a.amount)
        .sum();
    let eligible_count = aids.iter().filter(|a| a.is_eligible).count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "complementary_aids".to_string(),
        rule_name: "Complementary Aids".to_string(),
        input: serde_json::json!({
            "dependent_children": profile.dependent_children,
            "marital_status": profile.marital_status
        }),
        output: serde_json::json!({
            "aids": aids
                .iter()
                .map(|a| serde_json::json!({
                    "kind": a.kind,
                    "amount": a.amount.map(|v| v.normalize().to_string()),
                    "is_eligible": a.is_eligible
                }))
                .collect::<Vec<_>>(),
            "eligible_total": eligible_total.normalize().to_string()
        }),
        reasoning: format!(
            "{} of {} aids eligible, estimated €{} in total",
            eligible_count,
            aids.len(),
            eligible_total.normalize()
        ),
    };

    ComplementaryAidsResult { aids, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MaritalStatus, SeparationReason};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_profile(children: u32, status: MaritalStatus) -> ClaimantProfile {
        ClaimantProfile {
            last_monthly_gross_salary: dec("2500"),
            worked_months: 18,
            age: 35,
            separation_reason: SeparationReason::EconomicDismissal,
            separation_date: None,
            dependent_children: children,
            marital_status: status,
            spouse_is_working: false,
            spouse_monthly_income: Decimal::ZERO,
        }
    }

    fn aid(result: &ComplementaryAidsResult, kind: AidKind) -> &ComplementaryAid {
        result.aids.iter().find(|a| a.kind == kind).unwrap()
    }

    #[test]
    fn test_married_with_two_children() {
        let profile = create_profile(2, MaritalStatus::Married);
        let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);

        assert_eq!(aid(&result, AidKind::MinimumIncome).amount, Some(dec("1377.36")));

        let bonus = aid(&result, AidKind::ActivityBonus);
        assert!(bonus.is_eligible);
        assert_eq!(bonus.amount, Some(dec("159.4")));

        let school = aid(&result, AidKind::SchoolAllowance);
        assert!(school.is_eligible);
        assert_eq!(school.amount, Some(dec("832.8")));
    }

    #[test]
    fn test_single_without_children() {
        let profile = create_profile(0, MaritalStatus::Single);
        let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);

        let minimum_income = aid(&result, AidKind::MinimumIncome);
        assert!(minimum_income.is_eligible);
        assert_eq!(minimum_income.amount, Some(dec("635.71")));

        let bonus = aid(&result, AidKind::ActivityBonus);
        assert!(!bonus.is_eligible);
        assert_eq!(bonus.amount, Some(Decimal::ZERO));

        let school = aid(&result, AidKind::SchoolAllowance);
        assert!(!school.is_eligible);
        assert_eq!(school.amount, Some(Decimal::ZERO));
    }

    #[test]
    fn test_divorced_counts_as_single() {
        let profile = create_profile(1, MaritalStatus::Divorced);
        let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);

        // 635.71 + 211.9
        assert_eq!(aid(&result, AidKind::MinimumIncome).amount, Some(dec("847.61")));
    }

    #[test]
    fn test_flat_aids_always_eligible() {
        let profile = create_profile(0, MaritalStatus::Widowed);
        let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);

        assert_eq!(aid(&result, AidKind::MobilityAid).amount, Some(dec("150")));
        assert_eq!(aid(&result, AidKind::TrainingStipend).amount, Some(dec("652.02")));

        let health = aid(&result, AidKind::HealthCoverage);
        assert!(health.is_eligible);
        assert_eq!(health.amount, None);
        assert!(health.notes.contains("24 months"));
    }

    #[test]
    fn test_one_entry_per_aid_kind() {
        let profile = create_profile(3, MaritalStatus::CivilUnion);
        let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);

        assert_eq!(result.aids.len(), 6);
        let mut kinds: Vec<_> = result.aids.iter().map(|a| format!("{:?}", a.kind)).collect();
        kinds.dedup();
        assert_eq!(kinds.len(), 6);
    }

    #[test]
    fn test_audit_step_totals_eligible_amounts() {
        let profile = create_profile(0, MaritalStatus::Single);
        let result = estimate_complementary_aids(&profile, &AidRules::default(), 1);

        // 635.71 + 150 + 652.02
        assert_eq!(result.audit_step.output["eligible_total"], "1437.73");
        assert!(result.audit_step.reasoning.starts_with("4 of 6 aids eligible"));
    }
}
