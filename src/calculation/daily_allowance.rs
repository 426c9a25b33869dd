//! Daily allowance calculation functionality.
//!
//! This module applies the two-tier replacement formula to the reference
//! daily income and clamps the result between the statutory floor and ceiling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AllowanceRules;
use crate::models::AuditStep;

/// Reference income above which the marginal replacement rate drops (125.64).
pub const ALLOWANCE_THRESHOLD: Decimal = Decimal::from_parts(12564, 0, 0, false, 2);

/// Replacement rate up to the threshold (75%).
pub const LOWER_REPLACEMENT_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Replacement rate above the threshold (57%).
pub const UPPER_REPLACEMENT_RATE: Decimal = Decimal::from_parts(57, 0, 0, false, 2);

/// Minimum daily allowance (31.36).
pub const ALLOWANCE_FLOOR: Decimal = Decimal::from_parts(3136, 0, 0, false, 2);

/// Maximum daily allowance (261.54).
pub const ALLOWANCE_CEILING: Decimal = Decimal::from_parts(26154, 0, 0, false, 2);

/// Days in an allowance month.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Which tier of the formula produced the raw amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceTier {
    /// Reference income at or below the threshold.
    Proportional,
    /// Reference income above the threshold.
    Degressive,
}

/// Which clamp, if any, adjusted the raw amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceClamp {
    /// The raw amount was within bounds.
    None,
    /// Raised to the floor.
    Floor,
    /// Lowered to the ceiling.
    Ceiling,
}

/// The result of calculating the daily allowance, including the audit step.
#[derive(Debug, Clone)]
pub struct DailyAllowanceResult {
    /// The clamped daily allowance, unrounded.
    pub daily_amount: Decimal,
    /// The amount before clamping.
    pub raw_amount: Decimal,
    /// The formula tier that applied.
    pub tier: AllowanceTier,
    /// The clamp that applied.
    pub clamp: AllowanceClamp,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the daily allowance from the reference daily income.
///
/// - If `reference ≤ threshold`: `raw = reference × lower_rate`
/// - Otherwise: `raw = threshold × lower_rate + (reference − threshold) × upper_rate`
///
/// The raw amount is then clamped to `[floor, ceiling]`.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::calculate_daily_allowance;
/// use benefit_engine::config::AllowanceRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = AllowanceRules::default();
/// let reference = Decimal::from_str("100").unwrap();
/// let result = calculate_daily_allowance(reference, &rules, 1);
///
/// assert_eq!(result.daily_amount, Decimal::from_str("75").unwrap());
/// ```
pub fn calculate_daily_allowance(
    reference_daily_income: Decimal,
    rules: &AllowanceRules,
    step_number: u32,
) -> DailyAllowanceResult {
    let (raw_amount, tier) = if reference_daily_income <= rules.threshold {
        (
            reference_daily_income * rules.lower_rate,
            AllowanceTier::Proportional,
        )
    } else {
        (
            rules.threshold * rules.lower_rate
                + (reference_daily_income - rules.threshold) * rules.upper_rate,
            AllowanceTier::Degressive,
        )
    };

    let (daily_amount, clamp) = if raw_amount < rules.floor {
        (rules.floor, AllowanceClamp::Floor)
    } else if raw_amount > rules.ceiling {
        (rules.ceiling, AllowanceClamp::Ceiling)
    } else {
        (raw_amount, AllowanceClamp::None)
    };

    let formula = match tier {
        AllowanceTier::Proportional => format!(
            "€{} × {}",
            reference_daily_income.round_dp(2),
            rules.lower_rate.normalize()
        ),
        AllowanceTier::Degressive => format!(
            "€{} × {} + (€{} − €{}) × {}",
            rules.threshold.normalize(),
            rules.lower_rate.normalize(),
            reference_daily_income.round_dp(2),
            rules.threshold.normalize(),
            rules.upper_rate.normalize()
        ),
    };

    let reasoning = match clamp {
        AllowanceClamp::None => format!("{} = €{}", formula, raw_amount.round_dp(2)),
        AllowanceClamp::Floor => format!(
            "{} = €{} (raised to floor €{})",
            formula,
            raw_amount.round_dp(2),
            rules.floor.normalize()
        ),
        AllowanceClamp::Ceiling => format!(
            "{} = €{} (lowered to ceiling €{})",
            formula,
            raw_amount.round_dp(2),
            rules.ceiling.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_allowance".to_string(),
        rule_name: "Daily Allowance".to_string(),
        input: serde_json::json!({
            "reference_daily_income": reference_daily_income.round_dp(4).to_string(),
            "threshold": rules.threshold.normalize().to_string(),
            "lower_rate": rules.lower_rate.normalize().to_string(),
            "upper_rate": rules.upper_rate.normalize().to_string(),
            "floor": rules.floor.normalize().to_string(),
            "ceiling": rules.ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier": tier,
            "raw_amount": raw_amount.round_dp(4).to_string(),
            "daily_amount": daily_amount.round_dp(4).to_string(),
            "clamp": clamp
        }),
        reasoning,
    };

    DailyAllowanceResult {
        daily_amount,
        raw_amount,
        tier,
        clamp,
        audit_step,
    }
}

/// Returns the monthly and total allowance for a daily amount, unrounded.
///
/// `monthly = daily × days_per_month`, `total = daily × months × days_per_month`.
pub fn allowance_amounts(
    daily_amount: Decimal,
    max_duration_months: u32,
    rules: &AllowanceRules,
) -> (Decimal, Decimal) {
    let monthly = daily_amount * rules.days_per_month;
    let total = monthly * Decimal::from(max_duration_months);
    (monthly, total)
}
