//! Complementary aid models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kinds of complementary aid estimated alongside the main allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AidKind {
    /// Means-tested minimum income.
    MinimumIncome,
    /// Activity bonus for households with children.
    ActivityBonus,
    /// School-term allowance per dependent child.
    SchoolAllowance,
    /// Flat mobility aid for job search travel.
    MobilityAid,
    /// End-of-training stipend.
    TrainingStipend,
    /// Continued health coverage.
    HealthCoverage,
}

/// A supplementary benefit, evaluated independently of the others.
///
/// `amount` is `None` for aids that carry no monetary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplementaryAid {
    /// The aid type.
    pub kind: AidKind,
    /// Human-readable name.
    pub name: String,
    /// Estimated monthly or one-off amount, if the aid carries one.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    /// Whether the claimant qualifies.
    pub is_eligible: bool,
    /// Explanation shown next to the estimate.
    pub notes: String,
}
