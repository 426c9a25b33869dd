//! Claimant profile model and related types.
//!
//! This module defines the validated [`ClaimantProfile`] along with the
//! closed enums for separation reasons and marital status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why the claimant's employment ended.
///
/// The reason gates eligibility, the waiting period and the procedure plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationReason {
    /// Dismissal for economic reasons.
    EconomicDismissal,
    /// Dismissal with a severance/compensation payment.
    DismissalWithCompensation,
    /// A fixed-term contract reached its end.
    EndOfFixedTerm,
    /// The claimant resigned.
    VoluntaryResignation,
    /// Negotiated termination agreed by both parties.
    MutualTermination,
    /// The trial period was ended.
    EndOfTrialPeriod,
}

impl SeparationReason {
    /// Returns the snake_case tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparationReason::EconomicDismissal => "economic_dismissal",
            SeparationReason::DismissalWithCompensation => "dismissal_with_compensation",
            SeparationReason::EndOfFixedTerm => "end_of_fixed_term",
            SeparationReason::VoluntaryResignation => "voluntary_resignation",
            SeparationReason::MutualTermination => "mutual_termination",
            SeparationReason::EndOfTrialPeriod => "end_of_trial_period",
        }
    }
}

/// The claimant's marital status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Single.
    #[default]
    Single,
    /// Married.
    Married,
    /// Registered civil union.
    CivilUnion,
    /// Divorced.
    Divorced,
    /// Widowed.
    Widowed,
}

impl MaritalStatus {
    /// Returns true if the claimant lives as a couple for means-tested aids.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefit_engine::models::MaritalStatus;
    ///
    /// assert!(MaritalStatus::CivilUnion.is_couple());
    /// assert!(!MaritalStatus::Widowed.is_couple());
    /// ```
    pub fn is_couple(&self) -> bool {
        match self {
            MaritalStatus::Married | MaritalStatus::CivilUnion => true,
            MaritalStatus::Single | MaritalStatus::Divorced | MaritalStatus::Widowed => false,
        }
    }
}

/// A validated claimant profile.
///
/// Profiles are produced by the input validator and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantProfile {
    /// Gross salary of the last month worked.
    #[serde(with = "rust_decimal::serde::float")]
    pub last_monthly_gross_salary: Decimal,
    /// Months worked within the trailing 24-month window.
    pub worked_months: u32,
    /// Age in years.
    pub age: u32,
    /// Why the employment ended.
    pub separation_reason: SeparationReason,
    /// Date the employment ended, if known.
    pub separation_date: Option<NaiveDate>,
    /// Number of dependent children.
    pub dependent_children: u32,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// Whether the spouse currently works.
    pub spouse_is_working: bool,
    /// Monthly income of the spouse (zero when the spouse does not work).
    #[serde(with = "rust_decimal::serde::float")]
    pub spouse_monthly_income: Decimal,
}

impl ClaimantProfile {
    /// Returns true if the claimant has at least one dependent child.
    pub fn has_dependents(&self) -> bool {
        self.dependent_children > 0
    }
}
