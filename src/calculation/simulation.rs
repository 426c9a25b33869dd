//! Result aggregation.
//!
//! Runs every stage in order, numbers their audit steps, rounds the money
//! figures once and assembles the immutable [`SimulationResult`].

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;
use uuid::Uuid;

use crate::config::RulesConfig;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, BenefitCalculation, ClaimantProfile, ProfileSubmission, SimulationResult,
};

use super::{
    allowance_amounts, calculate_daily_allowance, estimate_complementary_aids,
    evaluate_eligibility, generate_procedure_plan, generate_timeline, resolve_duration,
    resolve_reference_income, resolve_waiting_period, validate_submission,
};

/// Rounds a money amount to `dp` decimals, midpoint away from zero.
fn round_money(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Runs the whole pipeline for a validated profile.
///
/// `created_at` stamps the result and is the reference date of the timeline.
/// Ineligible claimants still get every figure computed; only the procedure
/// plan and the timeline change.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::run_simulation;
/// use benefit_engine::config::RulesConfig;
/// use benefit_engine::models::{ClaimantProfile, MaritalStatus, SeparationReason};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let profile = ClaimantProfile {
///     last_monthly_gross_salary: Decimal::from(2500),
///     worked_months: 18,
///     age: 35,
///     separation_reason: SeparationReason::EconomicDismissal,
///     separation_date: NaiveDate::from_ymd_opt(2026, 9, 30),
///     dependent_children: 0,
///     marital_status: MaritalStatus::Single,
///     spouse_is_working: false,
///     spouse_monthly_income: Decimal::ZERO,
/// };
///
/// let result = run_simulation(&profile, &RulesConfig::default(), Utc::now());
/// assert!(result.eligibility.is_eligible);
/// assert_eq!(result.calculation.daily_amount, Decimal::from_str("61.60").unwrap());
/// assert_eq!(result.calculation.max_duration_months, 14);
/// ```
pub fn run_simulation(
    profile: &ClaimantProfile,
    rules: &RulesConfig,
    created_at: DateTime<Utc>,
) -> SimulationResult {
    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let reference = resolve_reference_income(
        profile.last_monthly_gross_salary,
        rules.reference_income(),
        step_number,
    );
    trace.steps.push(reference.audit_step);
    step_number += 1;

    let allowance = calculate_daily_allowance(
        reference.reference_daily_income,
        rules.allowance(),
        step_number,
    );
    trace.steps.push(allowance.audit_step);
    step_number += 1;

    let eligibility = evaluate_eligibility(profile, rules.eligibility(), step_number);
    trace.steps.push(eligibility.audit_step);
    step_number += 1;

    let duration = resolve_duration(
        profile.age,
        profile.worked_months,
        rules.duration(),
        step_number,
    );
    trace.steps.push(duration.audit_step);
    step_number += 1;

    let waiting_period = resolve_waiting_period(
        profile.separation_reason,
        profile.last_monthly_gross_salary,
        allowance.daily_amount,
        rules.waiting_period(),
        step_number,
    );
    trace.steps.push(waiting_period.audit_step);
    trace.warnings.extend(waiting_period.warning);
    step_number += 1;

    let aids = estimate_complementary_aids(profile, rules.aids(), step_number);
    trace.steps.push(aids.audit_step);
    step_number += 1;

    let plan = generate_procedure_plan(
        profile,
        &eligibility.verdict,
        rules.schedule(),
        step_number,
    );
    trace.steps.push(plan.audit_step);
    step_number += 1;

    let timeline = generate_timeline(
        created_at.date_naive(),
        &eligibility.verdict,
        waiting_period.waiting_period_days,
        duration.max_duration_months,
        rules.schedule(),
        step_number,
    );
    trace.steps.push(timeline.audit_step);

    let (monthly, total) = allowance_amounts(
        allowance.daily_amount,
        duration.max_duration_months,
        rules.allowance(),
    );

    let calculation = BenefitCalculation {
        reference_daily_income: round_money(reference.reference_daily_income, 2),
        daily_amount: round_money(allowance.daily_amount, 2),
        monthly_amount: round_money(monthly, 2),
        total_amount: round_money(total, 0),
        max_duration_months: duration.max_duration_months,
        waiting_period_days: waiting_period.waiting_period_days,
    };

    let simulation_id = Uuid::new_v4();
    info!(
        simulation_id = %simulation_id,
        is_eligible = eligibility.verdict.is_eligible,
        daily_amount = %calculation.daily_amount,
        max_duration_months = calculation.max_duration_months,
        warnings = trace.warnings.len(),
        "Simulation completed"
    );

    SimulationResult {
        simulation_id,
        created_at,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        profile: profile.clone(),
        eligibility: eligibility.verdict,
        calculation,
        complementary_aids: aids.aids,
        procedure_steps: plan.steps,
        timeline: timeline.events,
        audit_trace: trace,
    }
}

/// Validates a raw submission and runs the simulation.
///
/// Returns [`crate::error::EngineError::InvalidProfile`] listing every
/// violation if the submission is rejected; nothing is computed in that case.
pub fn simulate_submission(
    submission: ProfileSubmission,
    rules: &RulesConfig,
    created_at: DateTime<Utc>,
) -> EngineResult<SimulationResult> {
    let profile = validate_submission(submission)?;
    Ok(run_simulation(&profile, rules, created_at))
}
