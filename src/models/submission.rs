//! Raw claimant submission, before validation.
//!
//! Mandatory fields are optional here; the validator reports every missing or
//! malformed value at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MaritalStatus, SeparationReason};

/// Form data submitted by a collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    /// Gross salary of the last month worked. Required.
    #[serde(default)]
    pub last_monthly_gross_salary: Option<Decimal>,
    /// Months worked in the trailing 24 months. Required.
    #[serde(default)]
    pub worked_months: Option<i64>,
    /// Age in years. Required.
    #[serde(default)]
    pub age: Option<i64>,
    /// Why the employment ended. Required.
    #[serde(default)]
    pub separation_reason: Option<SeparationReason>,
    /// Date the employment ended.
    #[serde(default)]
    pub separation_date: Option<NaiveDate>,
    /// Number of dependent children, defaults to 0.
    #[serde(default)]
    pub dependent_children: Option<i64>,
    /// Marital status, defaults to single.
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    /// Whether the spouse works, defaults to false.
    #[serde(default)]
    pub spouse_is_working: Option<bool>,
    /// Monthly income of the spouse, defaults to 0.
    #[serde(default)]
    pub spouse_monthly_income: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_submission() {
        let json = r#"{
            "last_monthly_gross_salary": 2500,
            "worked_months": 18,
            "age": 35,
            "separation_reason": "economic_dismissal"
        }"#;

        let submission: ProfileSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.last_monthly_gross_salary, Some(Decimal::from(2500)));
        assert_eq!(submission.worked_months, Some(18));
        assert_eq!(submission.separation_date, None);
        assert_eq!(submission.marital_status, None);
    }

    #[test]
    fn test_salary_accepts_string_amount() {
        let json = r#"{ "last_monthly_gross_salary": "2500.50" }"#;
        let submission: ProfileSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(
            submission.last_monthly_gross_salary,
            Some(Decimal::new(250050, 2))
        );
    }

    #[test]
    fn test_empty_object_is_accepted() {
        let submission: ProfileSubmission = serde_json::from_str("{}").unwrap();
        assert_eq!(submission, ProfileSubmission::default());
    }
}
