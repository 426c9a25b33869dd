//! JSON export and import of single results.

use crate::error::{EngineError, EngineResult};
use crate::models::SimulationResult;

/// Serializes a result as pretty-printed JSON.
///
/// Amounts are JSON numbers, dates ISO-8601 strings and enums snake_case tags.
/// Monthly inputs are held to the cent by validation and computed amounts are
/// rounded, so every amount survives the trip through a JSON number.
pub fn export_json(result: &SimulationResult) -> EngineResult<String> {
    serde_json::to_string_pretty(result).map_err(|e| EngineError::Serialization {
        message: e.to_string(),
    })
}

/// Parses a result previously produced by [`export_json`].
pub fn import_json(json: &str) -> EngineResult<SimulationResult> {
    serde_json::from_str(json).map_err(|e| EngineError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{run_simulation, simulate_submission};
    use crate::config::RulesConfig;
    use crate::models::{ClaimantProfile, MaritalStatus, ProfileSubmission, SeparationReason};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn create_result() -> SimulationResult {
        let profile = ClaimantProfile {
            last_monthly_gross_salary: Decimal::from(2500),
            worked_months: 18,
            age: 35,
            separation_reason: SeparationReason::MutualTermination,
            separation_date: NaiveDate::from_ymd_opt(2026, 9, 30),
            dependent_children: 1,
            marital_status: MaritalStatus::CivilUnion,
            spouse_is_working: true,
            spouse_monthly_income: Decimal::from(1900),
        };
        let created_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        run_simulation(&profile, &RulesConfig::default(), created_at)
    }

    #[test]
    fn test_export_then_import_preserves_result() {
        let result = create_result();
        let json = export_json(&result).unwrap();

        assert_eq!(import_json(&json).unwrap(), result);
    }

    #[test]
    fn test_sub_cent_salary_survives_export() {
        let submission = ProfileSubmission {
            last_monthly_gross_salary: Some(Decimal::from_str("2500.12345678901234567").unwrap()),
            worked_months: Some(18),
            age: Some(35),
            separation_reason: Some(SeparationReason::MutualTermination),
            separation_date: NaiveDate::from_ymd_opt(2026, 9, 30),
            spouse_is_working: Some(true),
            spouse_monthly_income: Some(Decimal::from_str("1899.999").unwrap()),
            ..Default::default()
        };
        let created_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let result = simulate_submission(submission, &RulesConfig::default(), created_at).unwrap();

        let back = import_json(&export_json(&result).unwrap()).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.profile.last_monthly_gross_salary, Decimal::from_str("2500.12").unwrap());
        assert_eq!(back.profile.spouse_monthly_income, Decimal::from(1900));
    }

    #[test]
    fn test_export_format() {
        let json = export_json(&create_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["calculation"]["daily_amount"].is_number());
        assert_eq!(value["calculation"]["total_amount"], 25873.0);
        assert_eq!(value["profile"]["separation_date"], "2026-09-30");
        assert_eq!(value["profile"]["separation_reason"], "mutual_termination");
        assert_eq!(value["timeline"][0]["date"], "2026-10-19");
    }

    #[test]
    fn test_import_rejects_garbage() {
        let err = import_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, EngineError::Serialization { .. }));
    }
}
