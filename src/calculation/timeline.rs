//! Timeline generation.

use chrono::{Days, NaiveDate};

use crate::config::ScheduleRules;
use crate::models::{AuditStep, EligibilityVerdict, TimelineEvent, TimelineEventKind};

/// The result of generating the timeline, including the audit step.
#[derive(Debug, Clone)]
pub struct TimelineResult {
    /// Events sorted by date.
    pub events: Vec<TimelineEvent>,
    /// The audit step recording this generation.
    pub audit_step: AuditStep,
}

fn offset(reference_date: NaiveDate, days: u64) -> NaiveDate {
    reference_date
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Projects the key dates of the claim from a reference date.
///
/// - Registration deadline: `+3` days, critical.
/// - First payment: `+(7 + waiting_period_days)`, critical, eligible only.
/// - End of entitlement: `+(max_duration_months × 30)`, eligible only.
/// - First renewal: `+30` days, critical.
///
/// Events are sorted by date; events on the same date keep the order above.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::generate_timeline;
/// use benefit_engine::config::ScheduleRules;
/// use benefit_engine::models::{EligibilityVerdict, TimelineEventKind};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let verdict = EligibilityVerdict::from_conditions(true, true, true);
/// let result = generate_timeline(today, &verdict, 0, 14, &ScheduleRules::default(), 1);
///
/// assert_eq!(result.events[0].kind, TimelineEventKind::Registration);
/// assert_eq!(result.events[0].date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// ```
pub fn generate_timeline(
    reference_date: NaiveDate,
    verdict: &EligibilityVerdict,
    waiting_period_days: u32,
    max_duration_months: u32,
    rules: &ScheduleRules,
    step_number: u32,
) -> TimelineResult {
    let mut events = vec![TimelineEvent {
        date: offset(reference_date, u64::from(rules.registration_offset_days)),
        kind: TimelineEventKind::Registration,
        label: "Registration deadline".to_string(),
        is_critical: true,
    }];

    if verdict.is_eligible {
        let first_payment_days =
            u64::from(rules.first_payment_offset_days) + u64::from(waiting_period_days);
        let entitlement_days = u64::from(max_duration_months) * u64::from(rules.days_per_month);

        events.push(TimelineEvent {
            date: offset(reference_date, first_payment_days),
            kind: TimelineEventKind::FirstPayment,
            label: "Expected first payment".to_string(),
            is_critical: true,
        });
        events.push(TimelineEvent {
            date: offset(reference_date, entitlement_days),
            kind: TimelineEventKind::EndOfEntitlement,
            label: "Estimated end of entitlement".to_string(),
            is_critical: false,
        });
    }

    events.push(TimelineEvent {
        date: offset(reference_date, u64::from(rules.renewal_offset_days)),
        kind: TimelineEventKind::FirstRenewal,
        label: "First monthly renewal".to_string(),
        is_critical: true,
    });

    events.sort_by_key(|e| e.date);

    let audit_step = AuditStep {
        step_number,
        rule_id: "timeline".to_string(),
        rule_name: "Timeline".to_string(),
        input: serde_json::json!({
            "reference_date": reference_date,
            "is_eligible": verdict.is_eligible,
            "waiting_period_days": waiting_period_days,
            "max_duration_months": max_duration_months
        }),
        output: serde_json::json!({
            "events": events
                .iter()
                .map(|e| serde_json::json!({ "kind": e.kind, "date": e.date }))
                .collect::<Vec<_>>()
        }),
        reasoning: format!(
            "{} events projected from {}",
            events.len(),
            reference_date
        ),
    };

    TimelineResult { events, audit_step }
}
