use std::sync::Once;

use checker_core::{InspectionResult, RunReport, NO_DATA_MESSAGE, PASS_VERDICT};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(check_logging::initialize_for_tests);
}

fn indexed() -> InspectionResult {
    InspectionResult::from_payload(
        Some(PASS_VERDICT),
        Some("Submitted and indexed".to_string()),
        Some("2026-08-01T10:00:00Z".to_string()),
        Some("https://a.com/".to_string()),
    )
}

#[test]
fn payload_result_maps_pass_verdict() {
    init_logging();
    let result = indexed();
    assert!(result.indexed);
    assert!(result.is_ok());
    assert_eq!(result.status_text(), "✅ Да");
}

#[test]
fn non_pass_verdicts_are_not_indexed() {
    init_logging();
    for verdict in ["FAIL", "NEUTRAL", "PARTIAL", "VERDICT_UNSPECIFIED"] {
        let result = InspectionResult::from_payload(Some(verdict), None, None, None);
        assert!(!result.indexed, "verdict {verdict} must not count as indexed");
        assert!(result.is_ok());
        assert_eq!(result.status_text(), "❌ Нет");
    }
}

#[test]
fn missing_fields_fall_back_to_placeholders() {
    init_logging();
    let result = InspectionResult::from_payload(Some(PASS_VERDICT), None, None, None);
    assert_eq!(result.coverage_state, "UNKNOWN");
    assert_eq!(result.last_crawl_date, "—");
    assert_eq!(result.canonical_url, "—");
}

#[test]
fn failure_result_is_never_indexed() {
    init_logging();
    let result = InspectionResult::failure("connection refused");
    assert!(!result.indexed);
    assert_eq!(result.status_text(), "❌ Ошибка: connection refused");
}

#[test]
fn no_data_result_uses_fixed_message() {
    init_logging();
    let result = InspectionResult::no_data();
    assert!(!result.indexed);
    assert_eq!(result.error, NO_DATA_MESSAGE);
}

#[test]
fn report_keeps_check_order() {
    init_logging();
    let mut report = RunReport::new();
    report.record("https://b.com", indexed());
    report.record("https://a.com", InspectionResult::failure("timeout"));

    let urls: Vec<&str> = report.iter().map(|(url, _)| url).collect();
    assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
}

#[test]
fn recording_twice_keeps_one_entry_per_url() {
    init_logging();
    let mut report = RunReport::new();
    report.record("https://a.com", InspectionResult::failure("timeout"));
    report.record("https://a.com", indexed());

    assert_eq!(report.len(), 1);
    assert!(report.get("https://a.com").unwrap().indexed);
}

#[test]
fn summary_percent_rounds_to_one_decimal() {
    init_logging();
    let mut report = RunReport::new();
    report.record("https://a.com", indexed());
    report.record("https://b.com", indexed());
    report.record("https://c.com", indexed());
    report.record("https://d.com", InspectionResult::failure("404"));

    let summary = report.summary();
    assert_eq!(summary.indexed, 3);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.percent(), "75.0%");
    assert_eq!(summary.metric_text(), "3 из 4 (75.0%)");
}

#[test]
fn summary_of_thirds_rounds() {
    init_logging();
    let mut report = RunReport::new();
    report.record("https://a.com", indexed());
    report.record("https://b.com", InspectionResult::failure("x"));
    report.record("https://c.com", InspectionResult::failure("y"));

    assert_eq!(report.summary().percent(), "33.3%");
}

#[test]
fn empty_summary_is_zero_percent() {
    init_logging();
    let report = RunReport::new();
    assert_eq!(report.summary().percent(), "0.0%");
}
