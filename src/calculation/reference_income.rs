//! Reference daily income resolution.
//!
//! This module converts the last monthly gross salary into the capped daily
//! reference income that the allowance formula is applied to.

use rust_decimal::Decimal;

use crate::config::ReferenceIncomeRules;
use crate::models::AuditStep;

/// Months used to annualise a monthly salary.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Average number of days in a year.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// Statutory cap on the daily reference income (261.54).
pub const REFERENCE_CEILING: Decimal = Decimal::from_parts(26154, 0, 0, false, 2);

/// The result of resolving the reference income, including the audit step.
#[derive(Debug, Clone)]
pub struct ReferenceIncomeResult {
    /// The daily reference income after the ceiling, unrounded.
    pub reference_daily_income: Decimal,
    /// Whether the ceiling was applied.
    pub ceiling_applied: bool,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the daily reference income from a monthly gross salary.
///
/// `annual = monthly × 12`, `daily = annual / 365.25`, and the result is
/// capped at the reference ceiling. An intermediate amount that overflows,
/// or a zero divisor, resolves to the ceiling.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::resolve_reference_income;
/// use benefit_engine::config::ReferenceIncomeRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = ReferenceIncomeRules::default();
/// let result = resolve_reference_income(Decimal::from(2500), &rules, 1);
///
/// assert_eq!(result.reference_daily_income.round_dp(2), Decimal::from_str("82.14").unwrap());
/// assert!(!result.ceiling_applied);
/// ```
pub fn resolve_reference_income(
    monthly_gross_salary: Decimal,
    rules: &ReferenceIncomeRules,
    step_number: u32,
) -> ReferenceIncomeResult {
    let annual_gross = monthly_gross_salary.checked_mul(rules.months_per_year);
    let daily_reference = annual_gross.and_then(|annual| annual.checked_div(rules.days_per_year));

    // An amount too large to represent is above any ceiling.
    let (reference_daily_income, ceiling_applied) = match daily_reference {
        Some(daily) if daily <= rules.ceiling => (daily, false),
        _ => (rules.ceiling, true),
    };

    let daily_text = daily_reference
        .map(|daily| format!("€{}", daily.round_dp(2)))
        .unwrap_or_else(|| "an out-of-range amount".to_string());

    let reasoning = if ceiling_applied {
        format!(
            "€{} × {} / {} = {} (capped at reference ceiling €{})",
            monthly_gross_salary.normalize(),
            rules.months_per_year.normalize(),
            rules.days_per_year.normalize(),
            daily_text,
            rules.ceiling.normalize()
        )
    } else {
        format!(
            "€{} × {} / {} = {}",
            monthly_gross_salary.normalize(),
            rules.months_per_year.normalize(),
            rules.days_per_year.normalize(),
            daily_text
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "reference_income".to_string(),
        rule_name: "Reference Daily Income".to_string(),
        input: serde_json::json!({
            "monthly_gross_salary": monthly_gross_salary.normalize().to_string(),
            "months_per_year": rules.months_per_year.normalize().to_string(),
            "days_per_year": rules.days_per_year.normalize().to_string(),
            "ceiling": rules.ceiling.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_gross": annual_gross.map(|annual| annual.normalize().to_string()),
            "daily_reference": daily_reference.map(|daily| daily.round_dp(4).to_string()),
            "reference_daily_income": reference_daily_income.round_dp(4).to_string(),
            "ceiling_applied": ceiling_applied
        }),
        reasoning,
    };

    ReferenceIncomeResult {
        reference_daily_income,
        ceiling_applied,
        audit_step,
    }
}
