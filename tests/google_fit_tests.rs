// Google Fit client tests against a mocked aggregate endpoint

mod common;

use athleteshield::config::{AggregationConfig, GoogleFitConfig};
use athleteshield::google_fit::{DataType, FitError, GoogleFitClient};
use secrecy::SecretString;
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AGGREGATE_PATH: &str = "/fitness/v1/users/me/dataset:aggregate";

fn client_for(server: &MockServer) -> GoogleFitClient {
    GoogleFitClient::new(&GoogleFitConfig {
        base_url: format!("{}/", server.uri()),
        user_id: "me".into(),
    })
    .unwrap()
}

fn token() -> SecretString {
    SecretString::new("ya29.test-token".into())
}

#[test]
fn data_type_names_are_distinct_google_types() {
    let names: HashSet<&str> = DataType::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), 7);
    assert!(names.iter().all(|n| n.starts_with("com.google.")));
    assert_eq!(DataType::Sleep.name(), "com.google.sleep.segment");
    assert_eq!(DataType::Steps.to_string(), "com.google.step_count.delta");
}

#[test]
fn weight_uses_weekly_window_others_daily() {
    let config = AggregationConfig::default();
    assert_eq!(
        DataType::Weight.window(&config),
        Duration::from_secs(7 * 24 * 3600)
    );
    for t in DataType::ALL.into_iter().filter(|t| *t != DataType::Weight) {
        assert_eq!(t.window(&config), Duration::from_secs(24 * 3600), "{t}");
    }
}

#[tokio::test]
async fn aggregate_posts_bearer_request_and_parses_points() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AGGREGATE_PATH))
        .and(header("authorization", "Bearer ya29.test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::aggregate_body(vec![common::int_point(4321)])),
        )
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .aggregate(&token(), DataType::Steps, 1_000, 2_000)
        .await
        .expect("aggregate");
    assert_eq!(athleteshield::aggregator::steps(&resp), 4321);

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "aggregateBy": [{ "dataTypeName": "com.google.step_count.delta" }],
            "startTimeMillis": "1000",
            "endTimeMillis": "2000"
        })
    );
}

#[tokio::test]
async fn aggregate_maps_google_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AGGREGATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "Request had insufficient authentication scopes.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .aggregate(&token(), DataType::HeartRate, 0, 1)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.details(),
        "Request had insufficient authentication scopes."
    );
    assert!(matches!(err, FitError::Upstream { status: 403, .. }));
}

#[tokio::test]
async fn aggregate_falls_back_to_body_snippet() {
    let server = MockServer::start().await;
    let long_body = "x".repeat(1000);
    Mock::given(method("POST"))
        .and(path(AGGREGATE_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string(long_body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .aggregate(&token(), DataType::Calories, 0, 1)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.details().len(), 256);
}

#[tokio::test]
async fn aggregate_rejects_non_json_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AGGREGATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .aggregate(&token(), DataType::Distance, 0, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, FitError::Http(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn aggregate_sends_versioned_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(AGGREGATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client_for(&server)
        .aggregate(&token(), DataType::Weight, 0, 1)
        .await
        .expect("aggregate");
    let received = server.received_requests().await.unwrap();
    let ua = received[0].headers.get("user-agent").unwrap().to_str().unwrap();
    assert_eq!(ua, athleteshield::version::user_agent());
    assert!(ua.starts_with("athleteshield/"));
}
