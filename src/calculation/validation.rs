//! Input validation functionality.
//!
//! This module turns a raw [`ProfileSubmission`] into a [`ClaimantProfile`],
//! collecting every problem into a single error so that nothing is computed
//! from a partially valid submission.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult, FieldViolation};
use crate::models::{ClaimantProfile, ProfileSubmission};

/// Upper bound of the worked-months window.
pub const MAX_WORKED_MONTHS: i64 = 24;

/// Largest accepted monthly amount (salary or spouse income), one billion.
pub const MAX_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Monthly amounts are kept to the cent.
fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Validates a submission and applies the documented defaults.
///
/// Mandatory fields are `last_monthly_gross_salary` (positive, at most
/// [`MAX_MONTHLY_AMOUNT`]), `worked_months` (0 to 24), `age` (positive) and
/// `separation_reason`. Monthly amounts are rounded to the cent. Optional fields default
/// as follows: `dependent_children` to 0, `marital_status` to single,
/// `spouse_is_working` to false, `spouse_monthly_income` to 0. The spouse
/// income is discarded when the spouse does not work.
///
/// # Returns
///
/// The validated profile, or [`EngineError::InvalidProfile`] listing every
/// violation found.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::validate_submission;
/// use benefit_engine::models::{ProfileSubmission, SeparationReason};
/// use rust_decimal::Decimal;
///
/// let submission = ProfileSubmission {
///     last_monthly_gross_salary: Some(Decimal::from(2500)),
///     worked_months: Some(18),
///     age: Some(35),
///     separation_reason: Some(SeparationReason::EconomicDismissal),
///     ..Default::default()
/// };
///
/// let profile = validate_submission(submission).unwrap();
/// assert_eq!(profile.worked_months, 18);
/// assert_eq!(profile.dependent_children, 0);
/// ```
pub fn validate_submission(submission: ProfileSubmission) -> EngineResult<ClaimantProfile> {
    let mut violations = Vec::new();

    let salary = match submission.last_monthly_gross_salary.map(round_to_cents) {
        None => {
            violations.push(FieldViolation::new("last_monthly_gross_salary", "is required"));
            None
        }
        Some(salary) if salary <= Decimal::ZERO => {
            violations.push(FieldViolation::new(
                "last_monthly_gross_salary",
                "must be a positive amount",
            ));
            None
        }
        Some(salary) if salary > MAX_MONTHLY_AMOUNT => {
            violations.push(FieldViolation::new(
                "last_monthly_gross_salary",
                format!("must not exceed {}", MAX_MONTHLY_AMOUNT),
            ));
            None
        }
        Some(salary) => Some(salary),
    };

    let worked_months = match submission.worked_months {
        None => {
            violations.push(FieldViolation::new("worked_months", "is required"));
            None
        }
        Some(months) if !(0..=MAX_WORKED_MONTHS).contains(&months) => {
            violations.push(FieldViolation::new(
                "worked_months",
                format!("must be between 0 and {}", MAX_WORKED_MONTHS),
            ));
            None
        }
        Some(months) => u32::try_from(months).ok(),
    };

    let age = match submission.age {
        None => {
            violations.push(FieldViolation::new("age", "is required"));
            None
        }
        Some(age) if age <= 0 => {
            violations.push(FieldViolation::new("age", "must be a positive integer"));
            None
        }
        Some(age) => match u32::try_from(age) {
            Ok(age) => Some(age),
            Err(_) => {
                violations.push(FieldViolation::new("age", "is out of range"));
                None
            }
        },
    };

    if submission.separation_reason.is_none() {
        violations.push(FieldViolation::new("separation_reason", "is required"));
    }

    let dependent_children = match submission.dependent_children.unwrap_or(0) {
        children if children < 0 => {
            violations.push(FieldViolation::new(
                "dependent_children",
                "must not be negative",
            ));
            0
        }
        children => u32::try_from(children).unwrap_or_else(|_| {
            violations.push(FieldViolation::new("dependent_children", "is out of range"));
            0
        }),
    };

    let spouse_is_working = submission.spouse_is_working.unwrap_or(false);
    let spouse_monthly_income =
        round_to_cents(submission.spouse_monthly_income.unwrap_or(Decimal::ZERO));
    if spouse_monthly_income < Decimal::ZERO {
        violations.push(FieldViolation::new(
            "spouse_monthly_income",
            "must not be negative",
        ));
    } else if spouse_monthly_income > MAX_MONTHLY_AMOUNT {
        violations.push(FieldViolation::new(
            "spouse_monthly_income",
            format!("must not exceed {}", MAX_MONTHLY_AMOUNT),
        ));
    }

    match (salary, worked_months, age, submission.separation_reason) {
        (Some(salary), Some(worked_months), Some(age), Some(separation_reason))
            if violations.is_empty() =>
        {
            Ok(ClaimantProfile {
                last_monthly_gross_salary: salary,
                worked_months,
                age,
                separation_reason,
                separation_date: submission.separation_date,
                dependent_children,
                marital_status: submission.marital_status.unwrap_or_default(),
                spouse_is_working,
                spouse_monthly_income: if spouse_is_working {
                    spouse_monthly_income
                } else {
                    Decimal::ZERO
                },
            })
        }
        _ => Err(EngineError::InvalidProfile { violations }),
    }
}
