//! Calculation logic for the Benefit Simulation Engine.
//!
//! Each stage of the pipeline lives in its own module: input validation,
//! reference daily income, daily allowance, eligibility, entitlement
//! duration, waiting period, complementary aids, procedure plan and timeline.
//! [`run_simulation`] chains them and assembles the result.

mod complementary_aids;
mod daily_allowance;
mod duration;
mod eligibility;
mod procedure_plan;
mod reference_income;
mod simulation;
mod timeline;
mod validation;
mod waiting_period;

pub use complementary_aids::{
    ACTIVITY_BONUS, ComplementaryAidsResult, MINIMUM_INCOME_COUPLE, MINIMUM_INCOME_PER_CHILD,
    MINIMUM_INCOME_SINGLE, MOBILITY_AID, SCHOOL_ALLOWANCE_PER_CHILD, TRAINING_STIPEND,
    estimate_complementary_aids,
};
pub use daily_allowance::{
    ALLOWANCE_CEILING, ALLOWANCE_FLOOR, ALLOWANCE_THRESHOLD, AllowanceClamp, AllowanceTier,
    DAYS_PER_MONTH, DailyAllowanceResult, LOWER_REPLACEMENT_RATE, UPPER_REPLACEMENT_RATE,
    allowance_amounts, calculate_daily_allowance,
};
pub use duration::{AgeBand, DURATION_ACCRUAL_RATE, DurationResult, resolve_duration};
pub use eligibility::{
    EligibilityResult, MINIMUM_WORKED_MONTHS, evaluate_eligibility, reason_opens_rights,
};
pub use procedure_plan::{ProcedurePlanResult, generate_procedure_plan};
pub use reference_income::{
    DAYS_PER_YEAR, MONTHS_PER_YEAR, REFERENCE_CEILING, ReferenceIncomeResult,
    resolve_reference_income,
};
pub use simulation::{run_simulation, simulate_submission};
pub use timeline::{TimelineResult, generate_timeline};
pub use validation::{MAX_MONTHLY_AMOUNT, MAX_WORKED_MONTHS, validate_submission};
pub use waiting_period::{
    SEVERANCE_DEFERRAL_UNREACHABLE, SEVERANCE_ESTIMATE_MONTHS, SEVERANCE_THRESHOLD_MONTHS,
    WAITING_PERIOD_SATURATED, WaitingPeriodResult, resolve_waiting_period,
};
