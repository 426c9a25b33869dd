//! Entitlement duration resolution.
//!
//! The maximum number of compensated months depends on the claimant's age
//! band and on how long they worked.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::DurationRules;
use crate::models::AuditStep;

/// Compensated months accrued per worked month.
pub const DURATION_ACCRUAL_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// The age band a claimant falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Below the senior age.
    Standard,
    /// From the senior age up to the elder age.
    Senior,
    /// From the elder age.
    Elder,
}

/// The result of resolving the entitlement duration, including the audit step.
#[derive(Debug, Clone)]
pub struct DurationResult {
    /// Maximum compensated months.
    pub max_duration_months: u32,
    /// The age band that applied.
    pub band: AgeBand,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the maximum number of compensated months.
///
/// - Standard band (`age < 53`): fewer than 6 worked months gives 0, 6 to 23
///   gives `floor(worked × 0.8)`, 24 or more gives the full 24 months.
/// - Senior band (`53 ≤ age < 55`): `min(30, floor(worked × 0.8))`.
/// - Elder band (`age ≥ 55`): `min(36, floor(worked × 0.8))`.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::resolve_duration;
/// use benefit_engine::config::DurationRules;
///
/// let result = resolve_duration(35, 18, &DurationRules::default(), 1);
/// assert_eq!(result.max_duration_months, 14);
///
/// let result = resolve_duration(35, 4, &DurationRules::default(), 1);
/// assert_eq!(result.max_duration_months, 0);
/// ```
pub fn resolve_duration(
    age: u32,
    worked_months: u32,
    rules: &DurationRules,
    step_number: u32,
) -> DurationResult {
    let accrued = (Decimal::from(worked_months) * rules.accrual_rate)
        .floor()
        .to_u32()
        .unwrap_or(0);

    let band = if age < rules.senior_age {
        AgeBand::Standard
    } else if age < rules.elder_age {
        AgeBand::Senior
    } else {
        AgeBand::Elder
    };

    let (max_duration_months, reasoning) = match band {
        AgeBand::Standard if worked_months < rules.minimum_worked_months => (
            0,
            format!(
                "Age {} under {}: {} worked months is below the {}-month minimum, no entitlement",
                age, rules.senior_age, worked_months, rules.minimum_worked_months
            ),
        ),
        AgeBand::Standard if worked_months >= rules.full_entitlement_after_months => (
            rules.standard_max_months,
            format!(
                "Age {} under {}: {} worked months unlocks the full {} months",
                age, rules.senior_age, worked_months, rules.standard_max_months
            ),
        ),
        AgeBand::Standard => (
            accrued,
            format!(
                "Age {} under {}: floor({} × {}) = {} months",
                age,
                rules.senior_age,
                worked_months,
                rules.accrual_rate.normalize(),
                accrued
            ),
        ),
        AgeBand::Senior => {
            let months = accrued.min(rules.senior_max_months);
            (
                months,
                format!(
                    "Age {} in [{}, {}): min({}, floor({} × {})) = {} months",
                    age,
                    rules.senior_age,
                    rules.elder_age,
                    rules.senior_max_months,
                    worked_months,
                    rules.accrual_rate.normalize(),
                    months
                ),
            )
        }
        AgeBand::Elder => {
            let months = accrued.min(rules.elder_max_months);
            (
                months,
                format!(
                    "Age {} from {}: min({}, floor({} × {})) = {} months",
                    age,
                    rules.elder_age,
                    rules.elder_max_months,
                    worked_months,
                    rules.accrual_rate.normalize(),
                    months
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "entitlement_duration".to_string(),
        rule_name: "Entitlement Duration".to_string(),
        input: serde_json::json!({
            "age": age,
            "worked_months": worked_months,
            "accrual_rate": rules.accrual_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "band": band,
            "accrued_months": accrued,
            "max_duration_months": max_duration_months
        }),
        reasoning,
    };

    DurationResult {
        max_duration_months,
        band,
        audit_step,
    }
}
