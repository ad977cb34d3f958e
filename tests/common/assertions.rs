//! Assertion helpers for tests.

use axum::http::StatusCode;
use chrono::NaiveTime;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Parse an HH:MM:SS time value from a response body
pub fn parse_time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .unwrap_or_else(|e| panic!("Expected HH:MM:SS time, got {value:?}: {e}"))
}

/// Assert a reported time falls between two wall-clock readings taken
/// around the request, allowing the window to wrap past midnight.
pub fn assert_time_between(value: &str, before: NaiveTime, after: NaiveTime) {
    let time = parse_time(value);
    let in_window = if before <= after {
        before <= time && time <= after
    } else {
        time >= before || time <= after
    };

    assert!(in_window, "time {time} not between {before} and {after}");
}
