//! Integration tests for the Benefit Simulation Engine.
//!
//! This test suite drives the HTTP API end to end:
//! - Standard eligible claimant
//! - Ineligibility through work history or separation reason
//! - Complementary aids for families
//! - Waiting periods
//! - Simulation history and file-backed persistence
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;

use benefit_engine::api::{AppState, create_router};
use benefit_engine::config::ConfigLoader;
use benefit_engine::persistence::{JsonFileStore, SimulationHistory, export_json, import_json};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/are").expect("Failed to load config");
    AppState::new(config.rules().clone(), SimulationHistory::in_memory())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_simulation(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/simulations")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

fn create_submission(salary: u32, worked_months: u32, age: u32, reason: &str) -> Value {
    json!({
        "last_monthly_gross_salary": salary,
        "worked_months": worked_months,
        "age": age,
        "separation_reason": reason,
        "separation_date": "2026-09-30"
    })
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = decimal(&value.to_string());
    assert_eq!(
        actual,
        decimal(expected),
        "Expected amount {}, got {}",
        expected,
        actual
    );
}

fn aid<'a>(result: &'a Value, kind: &str) -> &'a Value {
    result["complementary_aids"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["kind"] == kind)
        .unwrap_or_else(|| panic!("No aid of kind {}", kind))
}

// =============================================================================
// SECTION 1: Eligible Claimants
// =============================================================================

#[tokio::test]
async fn test_standard_eligible_claimant() {
    // 2500 × 12 / 365.25 = 82.14; 82.14 × 0.75 = 61.60; floor(18 × 0.8) = 14 months
    let router = create_router_for_test();
    let body = create_submission(2500, 18, 35, "economic_dismissal");

    let (status, result) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["eligibility"]["is_eligible"], true);
    assert_amount(&result["calculation"]["reference_daily_income"], "82.14");
    assert_amount(&result["calculation"]["daily_amount"], "61.60");
    assert_amount(&result["calculation"]["monthly_amount"], "1848.05");
    assert_amount(&result["calculation"]["total_amount"], "25873");
    assert_eq!(result["calculation"]["max_duration_months"], 14);
    assert_eq!(result["calculation"]["waiting_period_days"], 0);
    assert_eq!(result["procedure_steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_amounts_serialize_as_numbers() {
    let router = create_router_for_test();
    let (_, result) = post_simulation(router, create_submission(2500, 18, 35, "end_of_fixed_term")).await;

    assert!(result["calculation"]["daily_amount"].is_number());
    assert!(result["profile"]["last_monthly_gross_salary"].is_number());
}

#[tokio::test]
async fn test_salary_as_string_is_accepted() {
    let router = create_router_for_test();
    let mut body = create_submission(2500, 18, 35, "economic_dismissal");
    body["last_monthly_gross_salary"] = json!("2500.00");

    let (status, result) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["calculation"]["daily_amount"], "61.60");
}

#[tokio::test]
async fn test_senior_claimant_with_full_history() {
    // Age 54: min(30, floor(24 × 0.8)) = 19 months
    let router = create_router_for_test();
    let (status, result) = post_simulation(router, create_submission(3200, 24, 54, "economic_dismissal")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["calculation"]["max_duration_months"], 19);
}

#[tokio::test]
async fn test_high_salary_capped_at_reference_ceiling() {
    let router = create_router_for_test();
    let (_, result) = post_simulation(router, create_submission(15000, 24, 40, "economic_dismissal")).await;

    assert_amount(&result["calculation"]["reference_daily_income"], "261.54");
    assert_amount(&result["calculation"]["daily_amount"], "171.69");
    assert_eq!(result["calculation"]["max_duration_months"], 24);
}

#[tokio::test]
async fn test_timeline_events_are_ordered() {
    let router = create_router_for_test();
    let (_, result) = post_simulation(router, create_submission(2500, 18, 35, "economic_dismissal")).await;

    let dates: Vec<&str> = result["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates.len(), 4);
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

// =============================================================================
// SECTION 2: Ineligible Claimants
// =============================================================================

#[tokio::test]
async fn test_short_work_history_is_ineligible() {
    let router = create_router_for_test();
    let (status, result) = post_simulation(router, create_submission(2500, 4, 35, "economic_dismissal")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["eligibility"]["is_eligible"], false);
    assert_eq!(result["eligibility"]["duration_met"], false);
    assert_eq!(result["calculation"]["max_duration_months"], 0);

    let steps = result["procedure_steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["order"], 1);
    assert!(steps[0]["title"].as_str().unwrap().contains("minimum income"));
}

#[tokio::test]
async fn test_voluntary_resignation_appends_review_step() {
    let router = create_router_for_test();
    let (status, result) = post_simulation(router, create_submission(2500, 18, 35, "voluntary_resignation")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["eligibility"]["reason_valid"], false);

    let steps = result["procedure_steps"].as_array().unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last["deadline"], "Within 21 days");
    assert_eq!(last["required_documents"].as_array().unwrap().len(), 3);
    let orders: Vec<u64> = steps.iter().map(|s| s["order"].as_u64().unwrap()).collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_missing_separation_date_is_ineligible() {
    let router = create_router_for_test();
    let body = json!({
        "last_monthly_gross_salary": 2500,
        "worked_months": 18,
        "age": 35,
        "separation_reason": "economic_dismissal"
    });

    let (status, result) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["eligibility"]["date_present"], false);
    assert_eq!(result["eligibility"]["is_eligible"], false);
}

// =============================================================================
// SECTION 3: Complementary Aids
// =============================================================================

#[tokio::test]
async fn test_married_with_two_children() {
    let router = create_router_for_test();
    let mut body = create_submission(2500, 18, 35, "economic_dismissal");
    body["marital_status"] = json!("married");
    body["dependent_children"] = json!(2);

    let (status, result) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&aid(&result, "minimum_income")["amount"], "1377.36");
    assert_amount(&aid(&result, "activity_bonus")["amount"], "159.4");
    assert_amount(&aid(&result, "school_allowance")["amount"], "832.8");
    assert!(aid(&result, "health_coverage")["amount"].is_null());
}

#[tokio::test]
async fn test_single_without_children() {
    let router = create_router_for_test();
    let (_, result) = post_simulation(router, create_submission(2500, 18, 35, "economic_dismissal")).await;

    assert_amount(&aid(&result, "minimum_income")["amount"], "635.71");
    assert_eq!(aid(&result, "activity_bonus")["is_eligible"], false);
    assert_eq!(aid(&result, "school_allowance")["is_eligible"], false);
}

// =============================================================================
// SECTION 4: Waiting Periods
// =============================================================================

#[tokio::test]
async fn test_dismissal_with_compensation_waits_seven_days() {
    let router = create_router_for_test();
    let (_, result) = post_simulation(router, create_submission(2500, 18, 35, "dismissal_with_compensation")).await;

    assert_eq!(result["calculation"]["waiting_period_days"], 7);
}

#[tokio::test]
async fn test_mutual_termination_flags_unreachable_deferral() {
    let router = create_router_for_test();
    let (status, result) = post_simulation(router, create_submission(2000, 18, 35, "mutual_termination")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["calculation"]["waiting_period_days"], 0);
    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "SEVERANCE_DEFERRAL_UNREACHABLE");
    assert_eq!(warnings[0]["severity"], "medium");
}

// =============================================================================
// SECTION 5: History and Persistence
// =============================================================================

#[tokio::test]
async fn test_history_lists_simulations_oldest_first() {
    let router = create_router_for_test();

    let (_, first) = post_simulation(router.clone(), create_submission(2100, 12, 30, "end_of_fixed_term")).await;
    let (_, second) = post_simulation(router.clone(), create_submission(2900, 20, 45, "economic_dismissal")).await;

    let (status, history) = get_json(router, "/simulations").await;

    assert_eq!(status, StatusCode::OK);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["simulation_id"], first["simulation_id"]);
    assert_eq!(history[1]["simulation_id"], second["simulation_id"]);
}

#[tokio::test]
async fn test_get_simulation_by_id() {
    let router = create_router_for_test();
    let (_, created) = post_simulation(router.clone(), create_submission(2500, 18, 35, "economic_dismissal")).await;
    let id = created["simulation_id"].as_str().unwrap();

    let (status, fetched) = get_json(router, &format!("/simulations/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_rejected_submissions_are_not_recorded() {
    let router = create_router_for_test();
    post_simulation(router.clone(), json!({ "age": 35 })).await;

    let (_, history) = get_json(router, "/simulations").await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::load("./config/are").unwrap();

    let store = Arc::new(JsonFileStore::new(dir.path()));
    let history = SimulationHistory::open(store, "claims").unwrap();
    let router = create_router(AppState::new(config.rules().clone(), history));
    let (_, created) = post_simulation(router, create_submission(2500, 18, 35, "economic_dismissal")).await;

    let saved = std::fs::read_to_string(dir.path().join("claims.json")).unwrap();
    assert!(saved.contains(created["simulation_id"].as_str().unwrap()));

    let store = Arc::new(JsonFileStore::new(dir.path()));
    let history = SimulationHistory::open(store, "claims").unwrap();
    let router = create_router(AppState::new(config.rules().clone(), history));
    let (status, history) = get_json(router, "/simulations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(history[0]["simulation_id"], created["simulation_id"]);
}

#[tokio::test]
async fn test_exported_result_imports_back() {
    let router = create_router_for_test();
    let (_, created) = post_simulation(router, create_submission(2500, 18, 35, "economic_dismissal")).await;

    let imported = import_json(&created.to_string()).unwrap();
    assert_eq!(imported.calculation.daily_amount, decimal("61.60"));
    assert_eq!(imported.calculation.total_amount, decimal("25873"));
}

#[tokio::test]
async fn test_sub_cent_salary_round_trips_through_export() {
    let router = create_router_for_test();
    let mut body = create_submission(2500, 18, 35, "economic_dismissal");
    body["last_monthly_gross_salary"] = json!("2500.12345678901234567");

    let (status, created) = post_simulation(router, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_amount(&created["profile"]["last_monthly_gross_salary"], "2500.12");

    let result = import_json(&created.to_string()).unwrap();
    let exported = export_json(&result).unwrap();
    assert_eq!(import_json(&exported).unwrap(), result);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(create_router_for_test(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["scheme"], "ARE");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/simulations")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_mandatory_fields() {
    let router = create_router_for_test();

    let (status, error) = post_simulation(router, json!({ "dependent_children": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = error["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["last_monthly_gross_salary", "worked_months", "age", "separation_reason"]
    );
}

#[tokio::test]
async fn test_error_non_numeric_age() {
    let router = create_router_for_test();
    let mut body = create_submission(2500, 18, 35, "economic_dismissal");
    body["age"] = json!("thirty-five");

    let (status, error) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_out_of_range_values() {
    let router = create_router_for_test();
    let body = json!({
        "last_monthly_gross_salary": -10,
        "worked_months": 30,
        "age": 0,
        "separation_reason": "economic_dismissal"
    });

    let (status, error) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["violations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_error_salary_above_maximum() {
    let router = create_router_for_test();
    let mut body = create_submission(2500, 18, 35, "economic_dismissal");
    body["last_monthly_gross_salary"] = json!(1e28);

    let (status, error) = post_simulation(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["violations"][0]["field"], "last_monthly_gross_salary");
}

#[tokio::test]
async fn test_error_unknown_separation_reason() {
    let router = create_router_for_test();
    let (status, error) = post_simulation(router, create_submission(2500, 18, 35, "retirement")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_unknown_simulation() {
    let (status, error) = get_json(
        create_router_for_test(),
        "/simulations/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "SIMULATION_NOT_FOUND");
}
