// SymptomLens - tests/e2e_api.rs
//
// End-to-end tests for the catalog and analysis round trips.
//
// These tests run the real reqwest client against a mockito server bound to
// a local port: real sockets, real JSON, real status codes. Each mock pins
// the method, path and (for analyze) the headers and JSON body it expects.

use mockito::{Matcher, Server};
use serde_json::json;
use std::time::{Duration, Instant};
use symptomlens::app::client::ApiClient;
use symptomlens::app::requests::RequestManager;
use symptomlens::app::state::AppState;
use symptomlens::core::model::{AnalyzeRequest, ApiProgress, Lang};
use symptomlens::core::render::format_result;
use symptomlens::util::error::ApiError;

const ONE_SYMPTOM: &str =
    r#"{"symptoms":[{"id":"a","en":"Cough","zh":"咳嗽","regions":["chest"]}]}"#;

/// Poll the manager until `count` messages have arrived or 10 s elapse.
fn wait_for(manager: &mut RequestManager, count: usize) -> Vec<ApiProgress> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut messages = Vec::new();
    while messages.len() < count && Instant::now() < deadline {
        messages.extend(manager.poll_progress());
        std::thread::sleep(Duration::from_millis(10));
    }
    messages
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn e2e_catalog_with_one_symptom_renders_one_chip() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/symptoms")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ONE_SYMPTOM)
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let symptoms = client.fetch_catalog().unwrap();
    mock.assert();

    let mut state = AppState::new(Lang::En, false);
    state.set_catalog(symptoms);
    let chips: Vec<&str> = state.visible_symptoms().map(|s| s.label(Lang::En)).collect();
    assert_eq!(chips, vec!["Cough"]);
}

#[test]
fn e2e_catalog_without_symptoms_array_is_empty_not_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/symptoms")
        .with_status(200)
        .with_body(r#"{"symptoms":"not-a-list"}"#)
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let symptoms = client.fetch_catalog().unwrap();
    assert!(symptoms.is_empty());
}

#[test]
fn e2e_catalog_http_error_is_reported() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/symptoms")
        .with_status(503)
        .with_body("{}")
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let result = client.fetch_catalog();
    assert!(
        matches!(result, Err(ApiError::Status { status, .. }) if status.as_u16() == 503),
        "expected Status(503), got {result:?}"
    );
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn e2e_analyze_posts_selection_and_renders_result() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/analyze")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            json!({"lang": "en", "symptoms": [{"id": "a"}, {"id": "b"}]}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title":"X","warning":"W"}"#)
        .create();
    let client = ApiClient::new(&format!("{}/", server.url())).unwrap();

    let request = AnalyzeRequest::new(Lang::En, ["a", "b"]);
    let result = client.analyze(&request).unwrap();

    mock.assert();
    assert_eq!(format_result(&result, Lang::En), "X\n\nW");
}

#[test]
fn e2e_analyze_server_error_becomes_error_line() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(500)
        .with_body(r#"{"error":"boom"}"#)
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let mut state = AppState::new(Lang::En, false);
    let request = state.begin_analysis().unwrap();
    let err = client.analyze(&request).unwrap_err();
    state.fail_analysis(&err.to_string());

    assert!(state.result_text.starts_with("Error: "), "{}", state.result_text);
    assert!(state.result_text.contains("500"), "{}", state.result_text);
    assert!(!state.analysis_in_flight);
}

#[test]
fn e2e_analyze_invalid_json_is_decode_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let result = client.analyze(&AnalyzeRequest::new(Lang::Zh, ["a"]));
    assert!(
        matches!(result, Err(ApiError::Decode { .. })),
        "expected Decode, got {result:?}"
    );
}

#[test]
fn e2e_analyze_null_body_is_an_error_not_an_empty_result() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let mut state = AppState::new(Lang::En, false);
    let request = state.begin_analysis().unwrap();
    let err = client.analyze(&request).unwrap_err();
    assert!(matches!(err, ApiError::NullBody { .. }), "got {err:?}");

    state.fail_analysis(&err.to_string());
    assert!(state.result_text.starts_with("Error: "), "{}", state.result_text);
    assert!(state.last_result.is_none());
}

#[test]
fn e2e_analyze_connection_refused_is_transport_error() {
    // Bind then drop to obtain a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ApiClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

    let result = client.analyze(&AnalyzeRequest::new(Lang::En, ["a"]));
    assert!(
        matches!(result, Err(ApiError::Transport { .. })),
        "expected Transport, got {result:?}"
    );
}

// =============================================================================
// Request manager
// =============================================================================

#[test]
fn e2e_request_manager_drives_state() {
    let mut server = Server::new();
    let catalog = server
        .mock("GET", "/api/symptoms")
        .with_status(200)
        .with_body(ONE_SYMPTOM)
        .create();
    let analyze = server
        .mock("POST", "/api/analyze")
        .match_body(Matcher::Json(json!({"lang": "en", "symptoms": [{"id": "a"}]})))
        .with_status(200)
        .with_body(r#"{"title":"Lung Qi","eightEvidence":["cough"]}"#)
        .create();
    let mut manager = RequestManager::connect(&server.url()).unwrap();
    let mut state = AppState::new(Lang::En, false);

    state.begin_catalog_load();
    manager.start_catalog_load();
    assert!(manager.is_busy());
    for msg in wait_for(&mut manager, 1) {
        state.apply_progress(msg);
    }
    catalog.assert();
    assert!(!manager.is_busy());
    assert_eq!(state.catalog.len(), 1);
    assert!(!state.catalog_loading);

    state.toggle("a");
    let request = state.begin_analysis().unwrap();
    manager.start_analysis(request);
    for msg in wait_for(&mut manager, 1) {
        state.apply_progress(msg);
    }
    analyze.assert();

    assert!(!state.analysis_in_flight);
    assert_eq!(state.result_text, "Lung Qi\n\n\nEvidence:\n• cough");
    assert_eq!(state.selected_summary(), "• Cough");
}

#[test]
fn e2e_request_manager_reports_catalog_failure() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/symptoms")
        .with_status(404)
        .with_body("{}")
        .create();
    let mut manager = RequestManager::connect(&server.url()).unwrap();
    let mut state = AppState::new(Lang::En, false);

    state.begin_catalog_load();
    manager.start_catalog_load();
    let messages = wait_for(&mut manager, 1);
    assert!(matches!(messages.as_slice(), [ApiProgress::CatalogFailed { .. }]));
    for msg in messages {
        state.apply_progress(msg);
    }
    assert!(state.catalog.is_empty());
    assert!(state.status_message.contains("Could not load symptom catalog"));
}

#[test]
fn e2e_null_catalog_is_reported_as_failure() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/api/symptoms")
        .with_status(200)
        .with_body("null")
        .create();
    let client = ApiClient::new(&server.url()).unwrap();

    let result = client.fetch_catalog();
    assert!(
        matches!(result, Err(ApiError::NullBody { .. })),
        "expected NullBody, got {result:?}"
    );
}
