//! Document client against a mock HTTP endpoint

use crate::common::{DocumentFactory, RecordingSubmitter, shared_gate};
use crpt_api::{
    ClientConfig, Config, CrptApi, CrptError, RateLimitConfig, SubmissionError, SubmitError,
    TimeUnit,
};
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREATE_PATH: &str = "/api/v3/lk/documents/create";

fn config_for(server: &MockServer, rate_limit: RateLimitConfig) -> Config {
    Config {
        client: ClientConfig {
            endpoint: format!("{}{}", server.uri(), CREATE_PATH),
            timeout_secs: 1,
            rate_limit,
        },
    }
}

#[tokio::test]
async fn test_create_document_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "docId": "doc-42",
            "docType": "LP_INTRODUCE_GOODS",
            "participantInn": "1234567890",
            "docStatus": "draft",
            "importRequest": false
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = CrptApi::from_config(&config_for(&server, RateLimitConfig::default())).unwrap();
    api.create_document(&DocumentFactory::with_id("doc-42"), "signature")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_is_returned_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let api = CrptApi::from_config(&config_for(&server, RateLimitConfig::default())).unwrap();
    let err = api
        .create_document(&DocumentFactory::create(), "")
        .await
        .unwrap_err();

    assert!(!err.is_rate_limited());
    match err {
        SubmitError::Submission(SubmissionError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
    assert_eq!(api.gate().stats().admitted_in_window, 1);
}

#[tokio::test]
async fn test_request_timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let api = CrptApi::from_config(&config_for(&server, RateLimitConfig::default())).unwrap();
    let err = api
        .create_document(&DocumentFactory::create(), "")
        .await
        .unwrap_err();

    match err {
        SubmitError::Submission(SubmissionError::Http(e)) => assert!(e.is_timeout()),
        other => panic!("Expected HTTP timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_submissions_are_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CREATE_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(5)
        .mount(&server)
        .await;

    let rate_limit = RateLimitConfig {
        capacity: 2,
        time_unit: TimeUnit::Millis,
        period_count: 300,
    };
    let api = CrptApi::from_config(&config_for(&server, rate_limit)).unwrap();
    let start = Instant::now();

    let documents: Vec<_> = (0..5).map(|_| DocumentFactory::create()).collect();
    let results = join_all(documents.iter().map(|doc| api.create_document(doc, ""))).await;
    assert!(results.iter().all(|r| r.is_ok()));

    // Five calls at two per window span three windows
    crate::assert_duration_at_least!(start.elapsed(), 600);
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 5);
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let server = MockServer::start().await;
    let rate_limit = RateLimitConfig::per(TimeUnit::Seconds, 0);

    let err = CrptApi::from_config(&config_for(&server, rate_limit)).unwrap_err();
    assert!(matches!(err, CrptError::Config(_)));
}

#[tokio::test(start_paused = true)]
async fn test_failed_submission_retry_waits_for_next_window() {
    let submitter = Arc::new(RecordingSubmitter::failing_first(1));
    let api = CrptApi::with_submitter(shared_gate(1, 100), submitter.clone());
    let document = DocumentFactory::import();

    assert!(api.create_document(&document, "").await.is_err());
    assert!(api.create_document(&document, "").await.is_ok());

    assert_eq!(submitter.call_count(), 2);
    let arrivals = submitter.arrivals();
    assert!(arrivals[1].duration_since(arrivals[0]) >= Duration::from_millis(100));

    // Both attempts carried the same document
    let payloads = submitter.payloads();
    assert_eq!(payloads[0], payloads[1]);
}

#[tokio::test(start_paused = true)]
async fn test_slow_submissions_do_not_hold_the_gate() {
    let submitter = Arc::new(RecordingSubmitter::with_latency(Duration::from_millis(500)));
    let api = CrptApi::with_submitter(shared_gate(2, 100), submitter.clone());
    let start = tokio::time::Instant::now();

    let documents: Vec<_> = (0..4).map(|_| DocumentFactory::create()).collect();
    join_all(documents.iter().map(|doc| api.create_document(doc, ""))).await;

    // Admission is independent of how long each call runs
    let offsets: Vec<u128> = submitter
        .arrivals()
        .iter()
        .map(|at| at.duration_since(start).as_millis())
        .collect();
    assert_eq!(offsets.iter().filter(|ms| **ms < 100).count(), 2);
    assert_eq!(offsets.iter().filter(|ms| (100..200).contains(*ms)).count(), 2);
}
