//! Waiting-period resolution.
//!
//! A compensation paid at separation postpones the first allowance payment
//! by roughly the number of allowance days it covers.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::WaitingPeriodRules;
use crate::models::{AuditStep, AuditWarning, SeparationReason, WarningSeverity};

/// Estimated severance for a mutual termination, in monthly salaries.
pub const SEVERANCE_ESTIMATE_MONTHS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Severance above this many monthly salaries defers the first payment.
pub const SEVERANCE_THRESHOLD_MONTHS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Warning code emitted when the severance deferral can never trigger.
pub const SEVERANCE_DEFERRAL_UNREACHABLE: &str = "SEVERANCE_DEFERRAL_UNREACHABLE";

/// Warning code emitted when the deferral cannot be expressed in days.
pub const WAITING_PERIOD_SATURATED: &str = "WAITING_PERIOD_SATURATED";

/// The result of resolving the waiting period, including the audit step.
#[derive(Debug, Clone)]
pub struct WaitingPeriodResult {
    /// Days before the first payment.
    pub waiting_period_days: u32,
    /// Estimated severance, for mutual terminations.
    pub estimated_severance: Option<Decimal>,
    /// Set when the configured severance rule cannot ever defer a payment.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the waiting period from the separation reason.
///
/// - `dismissal_with_compensation`: a fixed deferral (7 days).
/// - `mutual_termination`: `severance = salary × 2`; if it exceeds
///   `salary × 3` the deferral is `ceil(severance / daily_amount)` days,
///   otherwise 0. With the statutory multipliers the deferral is unreachable;
///   the rule is applied as configured and a warning is attached. A zero
///   daily amount or a deferral beyond `u32::MAX` days saturates to
///   `u32::MAX` with a warning.
/// - Any other reason: 0.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::resolve_waiting_period;
/// use benefit_engine::config::WaitingPeriodRules;
/// use benefit_engine::models::SeparationReason;
/// use rust_decimal::Decimal;
///
/// let result = resolve_waiting_period(
///     SeparationReason::DismissalWithCompensation,
///     Decimal::from(2500),
///     Decimal::from(60),
///     &WaitingPeriodRules::default(),
///     1,
/// );
/// assert_eq!(result.waiting_period_days, 7);
/// ```
pub fn resolve_waiting_period(
    separation_reason: SeparationReason,
    monthly_gross_salary: Decimal,
    daily_amount: Decimal,
    rules: &WaitingPeriodRules,
    step_number: u32,
) -> WaitingPeriodResult {
    let mut estimated_severance = None;
    let mut warning = None;

    let (waiting_period_days, reasoning) = match separation_reason {
        SeparationReason::DismissalWithCompensation => (
            rules.compensation_deferral_days,
            format!(
                "Dismissal with compensation: fixed {}-day deferral",
                rules.compensation_deferral_days
            ),
        ),
        SeparationReason::MutualTermination => {
            let severance = monthly_gross_salary.saturating_mul(rules.severance_estimate_months);
            let threshold = monthly_gross_salary.saturating_mul(rules.severance_threshold_months);
            estimated_severance = Some(severance);

            if rules.severance_estimate_months <= rules.severance_threshold_months {
                warning = Some(AuditWarning {
                    code: SEVERANCE_DEFERRAL_UNREACHABLE.to_string(),
                    message: format!(
                        "Severance is estimated at {} monthly salaries but only defers payment above {}; \
                         the deferral can never apply under the current rules",
                        rules.severance_estimate_months.normalize(),
                        rules.severance_threshold_months.normalize()
                    ),
                    severity: WarningSeverity::Medium,
                });
            }

            if severance > threshold {
                let days = match severance
                    .checked_div(daily_amount)
                    .map(|d| d.ceil())
                    .and_then(|d| d.to_u32())
                {
                    Some(days) => days,
                    None => {
                        warning = Some(AuditWarning {
                            code: WAITING_PERIOD_SATURATED.to_string(),
                            message: format!(
                                "Severance of €{} over a daily amount of €{} does not fit in a day count",
                                severance.normalize(),
                                daily_amount.round_dp(2)
                            ),
                            severity: WarningSeverity::High,
                        });
                        u32::MAX
                    }
                };
                (
                    days,
                    format!(
                        "Mutual termination: severance €{} exceeds €{}, ceil(€{} / €{}) = {} days",
                        severance.normalize(),
                        threshold.normalize(),
                        severance.normalize(),
                        daily_amount.round_dp(2),
                        days
                    ),
                )
            } else {
                (
                    0,
                    format!(
                        "Mutual termination: severance €{} does not exceed €{}, no deferral",
                        severance.normalize(),
                        threshold.normalize()
                    ),
                )
            }
        }
        SeparationReason::EconomicDismissal
        | SeparationReason::EndOfFixedTerm
        | SeparationReason::VoluntaryResignation
        | SeparationReason::EndOfTrialPeriod => (
            0,
            format!(
                "Separation by {}: no deferral",
                separation_reason.as_str()
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "waiting_period".to_string(),
        rule_name: "Waiting Period".to_string(),
        input: serde_json::json!({
            "separation_reason": separation_reason,
            "monthly_gross_salary": monthly_gross_salary.normalize().to_string(),
            "daily_amount": daily_amount.round_dp(4).to_string()
        }),
        output: serde_json::json!({
            "estimated_severance": estimated_severance.map(|s| s.normalize().to_string()),
            "waiting_period_days": waiting_period_days
        }),
        reasoning,
    };

    WaitingPeriodResult {
        waiting_period_days,
        estimated_severance,
        warning,
        audit_step,
    }
}
