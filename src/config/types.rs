//! Configuration types for benefit simulation.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from YAML configuration files. Every type implements
//! [`Default`] with the statutory values, so the engine can run without
//! any configuration directory.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use crate::calculation::{
    ACTIVITY_BONUS, ALLOWANCE_CEILING, ALLOWANCE_FLOOR, ALLOWANCE_THRESHOLD, DAYS_PER_MONTH,
    DAYS_PER_YEAR, DURATION_ACCRUAL_RATE, LOWER_REPLACEMENT_RATE, MINIMUM_INCOME_COUPLE,
    MINIMUM_INCOME_PER_CHILD, MINIMUM_INCOME_SINGLE, MINIMUM_WORKED_MONTHS, MOBILITY_AID,
    MONTHS_PER_YEAR, REFERENCE_CEILING, SCHOOL_ALLOWANCE_PER_CHILD,
    SEVERANCE_ESTIMATE_MONTHS, SEVERANCE_THRESHOLD_MONTHS, TRAINING_STIPEND,
    UPPER_REPLACEMENT_RATE,
};

/// Metadata about the benefit scheme the rules describe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemeMetadata {
    /// Short scheme code (e.g., "ARE").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// URL to the official documentation.
    pub source_url: String,
}

impl Default for SchemeMetadata {
    fn default() -> Self {
        Self {
            code: "ARE".to_string(),
            name: "Return-to-work assistance allowance".to_string(),
            version: "2025-07-01".to_string(),
            source_url: "https://www.unedic.org".to_string(),
        }
    }
}

/// Rules turning a monthly salary into a daily reference income.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceIncomeRules {
    /// Months in a year used to annualise the salary.
    pub months_per_year: Decimal,
    /// Average year length used to derive a daily income.
    pub days_per_year: Decimal,
    /// Statutory cap on the daily reference income.
    pub ceiling: Decimal,
}

impl Default for ReferenceIncomeRules {
    fn default() -> Self {
        Self {
            months_per_year: MONTHS_PER_YEAR,
            days_per_year: DAYS_PER_YEAR,
            ceiling: REFERENCE_CEILING,
        }
    }
}

/// The two-tier replacement formula and its clamps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AllowanceRules {
    /// Reference income at which the marginal replacement rate drops.
    pub threshold: Decimal,
    /// Replacement rate up to the threshold.
    pub lower_rate: Decimal,
    /// Replacement rate above the threshold.
    pub upper_rate: Decimal,
    /// Minimum daily allowance.
    pub floor: Decimal,
    /// Maximum daily allowance.
    pub ceiling: Decimal,
    /// Days in an allowance month.
    pub days_per_month: Decimal,
}

impl Default for AllowanceRules {
    fn default() -> Self {
        Self {
            threshold: ALLOWANCE_THRESHOLD,
            lower_rate: LOWER_REPLACEMENT_RATE,
            upper_rate: UPPER_REPLACEMENT_RATE,
            floor: ALLOWANCE_FLOOR,
            ceiling: ALLOWANCE_CEILING,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

/// Eligibility gate parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EligibilityRules {
    /// Months that must have been worked in the trailing window.
    pub minimum_worked_months: u32,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            minimum_worked_months: MINIMUM_WORKED_MONTHS,
        }
    }
}

/// Age-banded entitlement duration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DurationRules {
    /// Compensated months accrued per worked month.
    pub accrual_rate: Decimal,
    /// Below this many worked months, claimants under `senior_age` accrue nothing.
    pub minimum_worked_months: u32,
    /// Worked months that unlock the full standard entitlement.
    pub full_entitlement_after_months: u32,
    /// The full standard entitlement, in months.
    pub standard_max_months: u32,
    /// Age from which the senior cap applies.
    pub senior_age: u32,
    /// Cap for the senior band.
    pub senior_max_months: u32,
    /// Age from which the elder cap applies.
    pub elder_age: u32,
    /// Cap for the elder band.
    pub elder_max_months: u32,
}

impl Default for DurationRules {
    fn default() -> Self {
        Self {
            accrual_rate: DURATION_ACCRUAL_RATE,
            minimum_worked_months: MINIMUM_WORKED_MONTHS,
            full_entitlement_after_months: 24,
            standard_max_months: 24,
            senior_age: 53,
            senior_max_months: 30,
            elder_age: 55,
            elder_max_months: 36,
        }
    }
}

/// Waiting-period parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaitingPeriodRules {
    /// Fixed deferral after a dismissal with compensation.
    pub compensation_deferral_days: u32,
    /// Severance estimate for a mutual termination, in monthly salaries.
    pub severance_estimate_months: Decimal,
    /// Severance above this many monthly salaries defers the first payment.
    pub severance_threshold_months: Decimal,
}

impl Default for WaitingPeriodRules {
    fn default() -> Self {
        Self {
            compensation_deferral_days: 7,
            severance_estimate_months: SEVERANCE_ESTIMATE_MONTHS,
            severance_threshold_months: SEVERANCE_THRESHOLD_MONTHS,
        }
    }
}

/// Contents of `allowance.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AllowanceConfig {
    /// Reference income rules.
    pub reference_income: ReferenceIncomeRules,
    /// Replacement formula.
    pub allowance: AllowanceRules,
    /// Eligibility gate.
    pub eligibility: EligibilityRules,
    /// Entitlement duration.
    pub duration: DurationRules,
    /// Waiting period.
    pub waiting_period: WaitingPeriodRules,
}

/// Contents of `aids.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AidRules {
    /// Minimum income base for a single person.
    pub minimum_income_single: Decimal,
    /// Minimum income base for a couple.
    pub minimum_income_couple: Decimal,
    /// Minimum income supplement per dependent child.
    pub minimum_income_per_child: Decimal,
    /// Flat activity bonus for households with children.
    pub activity_bonus: Decimal,
    /// School-term allowance per dependent child.
    pub school_allowance_per_child: Decimal,
    /// Flat mobility aid.
    pub mobility_aid: Decimal,
    /// Flat end-of-training stipend.
    pub training_stipend: Decimal,
    /// How long health coverage is maintained, in months.
    pub health_coverage_months: u32,
}

impl Default for AidRules {
    fn default() -> Self {
        Self {
            minimum_income_single: MINIMUM_INCOME_SINGLE,
            minimum_income_couple: MINIMUM_INCOME_COUPLE,
            minimum_income_per_child: MINIMUM_INCOME_PER_CHILD,
            activity_bonus: ACTIVITY_BONUS,
            school_allowance_per_child: SCHOOL_ALLOWANCE_PER_CHILD,
            mobility_aid: MOBILITY_AID,
            training_stipend: TRAINING_STIPEND,
            health_coverage_months: 24,
        }
    }
}

/// Contents of `schedule.yaml`: deadlines and calendar offsets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleRules {
    /// Deadline to register after losing the job, in hours.
    pub registration_deadline_hours: u32,
    /// Offset of the registration milestone, in days.
    pub registration_offset_days: u32,
    /// Deadline for the intake interview, in days.
    pub intake_interview_days: u32,
    /// Base delay before the first payment, in days.
    pub first_payment_offset_days: u32,
    /// Offset of the first monthly renewal, in days.
    pub renewal_offset_days: u32,
    /// Days counted per entitlement month on the calendar.
    pub days_per_month: u32,
    /// Deadline to file a legitimate-resignation review, in days.
    pub resignation_review_days: u32,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            registration_deadline_hours: 72,
            registration_offset_days: 3,
            intake_interview_days: 15,
            first_payment_offset_days: 7,
            renewal_offset_days: 30,
            days_per_month: 30,
            resignation_review_days: 21,
        }
    }
}

/// The complete rule set loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a rules directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesConfig {
    metadata: SchemeMetadata,
    allowance: AllowanceConfig,
    aids: AidRules,
    schedule: ScheduleRules,
}

impl RulesConfig {
    /// Creates a new RulesConfig from its component parts.
    pub fn new(
        metadata: SchemeMetadata,
        allowance: AllowanceConfig,
        aids: AidRules,
        schedule: ScheduleRules,
    ) -> Self {
        Self {
            metadata,
            allowance,
            aids,
            schedule,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the reference income rules.
    pub fn reference_income(&self) -> &ReferenceIncomeRules {
        &self.allowance.reference_income
    }

    /// Returns the replacement formula.
    pub fn allowance(&self) -> &AllowanceRules {
        &self.allowance.allowance
    }

    /// Returns the eligibility gate parameters.
    pub fn eligibility(&self) -> &EligibilityRules {
        &self.allowance.eligibility
    }

    /// Returns the duration rules.
    pub fn duration(&self) -> &DurationRules {
        &self.allowance.duration
    }

    /// Returns the waiting-period rules.
    pub fn waiting_period(&self) -> &WaitingPeriodRules {
        &self.allowance.waiting_period
    }

    /// Returns the complementary aid amounts.
    pub fn aids(&self) -> &AidRules {
        &self.aids
    }

    /// Returns the schedule offsets.
    pub fn schedule(&self) -> &ScheduleRules {
        &self.schedule
    }

    /// Checks the loaded values against the constraints the calculation
    /// relies on.
    ///
    /// Divisors and multipliers must be positive, rates must lie in `[0, 1]`,
    /// the allowance floor must not exceed its ceiling and the senior age
    /// band must start no later than the elder band. Every broken constraint
    /// is reported in a single [`EngineError::ConfigParseError`] against
    /// `allowance.yaml`, where all of these values live.
    pub fn validate(&self) -> EngineResult<()> {
        let mut problems = Vec::new();

        let reference = self.reference_income();
        if reference.months_per_year <= Decimal::ZERO {
            problems.push("reference_income.months_per_year must be positive".to_string());
        }
        if reference.days_per_year <= Decimal::ZERO {
            problems.push("reference_income.days_per_year must be positive".to_string());
        }
        if reference.ceiling <= Decimal::ZERO {
            problems.push("reference_income.ceiling must be positive".to_string());
        }

        let allowance = self.allowance();
        if allowance.threshold < Decimal::ZERO {
            problems.push("allowance.threshold must not be negative".to_string());
        }
        for (name, rate) in [
            ("allowance.lower_rate", allowance.lower_rate),
            ("allowance.upper_rate", allowance.upper_rate),
            ("duration.accrual_rate", self.duration().accrual_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                problems.push(format!("{} must be between 0 and 1", name));
            }
        }
        if allowance.floor < Decimal::ZERO {
            problems.push("allowance.floor must not be negative".to_string());
        }
        if allowance.floor > allowance.ceiling {
            problems.push(format!(
                "allowance.floor ({}) must not exceed allowance.ceiling ({})",
                allowance.floor, allowance.ceiling
            ));
        }
        if allowance.days_per_month <= Decimal::ZERO {
            problems.push("allowance.days_per_month must be positive".to_string());
        }

        let duration = self.duration();
        if duration.senior_age > duration.elder_age {
            problems.push(format!(
                "duration.senior_age ({}) must not exceed duration.elder_age ({})",
                duration.senior_age, duration.elder_age
            ));
        }

        let waiting = self.waiting_period();
        if waiting.severance_estimate_months < Decimal::ZERO
            || waiting.severance_threshold_months < Decimal::ZERO
        {
            problems.push("waiting_period severance multipliers must not be negative".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(EngineError::ConfigParseError {
                path: "allowance.yaml".to_string(),
                message: problems.join("; "),
            })
        }
    }

    /// Returns a copy with different waiting-period rules.
    pub fn with_waiting_period(mut self, rules: WaitingPeriodRules) -> Self {
        self.allowance.waiting_period = rules;
        self
    }
}
