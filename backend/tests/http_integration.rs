#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use sleepcalc::http::{create_router, AppState};

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router(AppState::default())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], "v1");
}

#[tokio::test]
async fn test_list_age_brackets() {
    let (status, body) = send(get("/v1/age-brackets")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 12);
    assert_eq!(body["brackets"][0]["id"], "months_0_to_3");
    assert_eq!(body["brackets"][0]["cycle_minutes"], 50);
    assert_eq!(body["brackets"][11]["label"], "65+ Years");
}

#[tokio::test]
async fn test_post_schedule_wake_at() {
    let (status, body) = send(post_json(
        "/v1/schedule",
        json!({
            "hour": 7,
            "minute": 0,
            "meridiem": "AM",
            "mode": "wake_at",
            "age_bracket": "years_18_to_25"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["time"], "11:15 PM");
    assert_eq!(rows[0]["is_ideal"], true);
    assert_eq!(rows[1]["time"], "12:45 AM");
    assert_eq!(rows[2]["time"], "09:45 PM");
    assert_eq!(body["result"]["ideal_index"], 0);
    assert_eq!(body["result"]["candidates"][0]["time"], 23 * 60 + 15);
    assert_eq!(body["result"]["mode"], "wake_at");
}

#[tokio::test]
async fn test_get_schedule_sleep_at_with_label() {
    let (status, body) = send(get(
        "/v1/schedule?hour=10&minute=30&meridiem=PM&mode=sleep_at&age_bracket=6-13%20Years",
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"][0]["time"], "09:00 AM");
    assert_eq!(body["rows"][0]["label"], "Recommended wake time");
    assert_eq!(body["rows"][1]["time"], "07:30 AM");
    assert_eq!(body["rows"][2]["time"], "10:30 AM");
}

#[tokio::test]
async fn test_missing_age_bracket_is_bad_request() {
    let (status, body) = send(post_json(
        "/v1/schedule",
        json!({ "hour": 7, "minute": 0, "meridiem": "AM" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_AGE_BRACKET");
    assert_eq!(body["message"], "Please select your age range before calculating.");
}

#[tokio::test]
async fn test_unknown_age_bracket_has_details() {
    let (status, body) = send(get(
        "/v1/schedule?hour=7&minute=0&meridiem=AM&age_bracket=ancient",
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_AGE_BRACKET");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_out_of_range_hour_is_bad_request() {
    let (status, body) = send(post_json(
        "/v1/schedule",
        json!({
            "hour": 13,
            "minute": 0,
            "meridiem": "PM",
            "age_bracket": "years_26_to_35"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/schedule")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"hour\": "))
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
