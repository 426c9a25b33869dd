//! Allowance calculation and eligibility models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed replacement allowance for a claimant.
///
/// Amounts are rounded when the simulation result is assembled: the reference
/// income, daily and monthly amounts to cents, the total to whole currency units.
///
/// # Example
///
/// ```
/// use benefit_engine::models::BenefitCalculation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculation = BenefitCalculation {
///     reference_daily_income: Decimal::from_str("82.14").unwrap(),
///     daily_amount: Decimal::from_str("61.60").unwrap(),
///     monthly_amount: Decimal::from_str("1848.05").unwrap(),
///     total_amount: Decimal::from_str("25873").unwrap(),
///     max_duration_months: 14,
///     waiting_period_days: 0,
/// };
/// assert_eq!(calculation.max_duration_months, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitCalculation {
    /// Daily reference income, capped at the reference ceiling.
    #[serde(with = "rust_decimal::serde::float")]
    pub reference_daily_income: Decimal,
    /// Daily allowance after the floor and ceiling are applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_amount: Decimal,
    /// Allowance for a 30-day month.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_amount: Decimal,
    /// Allowance over the whole entitlement.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Maximum number of compensated months.
    pub max_duration_months: u32,
    /// Days between eligibility and the first payment.
    pub waiting_period_days: u32,
}

/// The outcome of the eligibility gate.
///
/// The three sub-conditions are kept so that a refusal can be explained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// True if every condition holds.
    pub is_eligible: bool,
    /// The claimant worked at least the minimum number of months.
    pub duration_met: bool,
    /// The separation reason opens rights to the allowance.
    pub reason_valid: bool,
    /// A separation date was supplied.
    pub date_present: bool,
}

impl EligibilityVerdict {
    /// Builds a verdict from its three sub-conditions.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefit_engine::models::EligibilityVerdict;
    ///
    /// let verdict = EligibilityVerdict::from_conditions(true, false, true);
    /// assert!(!verdict.is_eligible);
    /// assert_eq!(verdict.failed_conditions(), vec!["separation_reason"]);
    /// ```
    pub fn from_conditions(duration_met: bool, reason_valid: bool, date_present: bool) -> Self {
        Self {
            is_eligible: duration_met && reason_valid && date_present,
            duration_met,
            reason_valid,
            date_present,
        }
    }

    /// Returns the names of the conditions that failed.
    pub fn failed_conditions(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.duration_met {
            failed.push("worked_months");
        }
        if !self.reason_valid {
            failed.push("separation_reason");
        }
        if !self.date_present {
            failed.push("separation_date");
        }
        failed
    }
}
