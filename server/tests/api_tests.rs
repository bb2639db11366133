use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use mockall::mock;
use serde_json::{Value, json};
use tower::ServiceExt;
use trainspotter_server::{
    AppState,
    BartClient,
    DepartureSource,
    DestinationEtas,
    EtdReport,
    UpstreamConfig,
    build_router,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mock! {
    pub Source {}

    #[async_trait]
    impl DepartureSource for Source {
        async fn report(&self) -> EtdReport;
    }
}

const ETD_PATH: &str = "/api/etd.aspx";

const EMBARCADERO: &str = r#"{
    "root": {
        "station": [{
            "name": "Embarcadero",
            "etd": [
                {"destination": "Daly City", "estimate": [{"minutes": "Leaving"}, {"minutes": "12"}]},
                {"destination": "SF Airport", "estimate": [{"minutes": "5"}]}
            ]
        }]
    }
}"#;

fn upstream_config(server: &MockServer) -> UpstreamConfig {
    UpstreamConfig {
        base_url: format!("{}{}", server.uri(), ETD_PATH),
        station: "embr".to_string(),
        api_key: "test-key".to_string(),
        direction: Some("s".to_string()),
        timeout: Duration::from_millis(500),
    }
}

fn app_for(source: impl DepartureSource + 'static) -> axum::Router { build_router(AppState::new(Arc::new(source))) }

async fn get(
    app: axum::Router,
    uri: &str,
) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, content_type, value)
}

// =============================================================================
// Router with a mocked source
// =============================================================================

#[tokio::test]
async fn test_root_returns_departures() {
    let mut source = MockSource::new();
    source.expect_report().times(1).returning(|| {
        EtdReport::Departures(vec![DestinationEtas {
            destination: "Richmond".to_string(),
            minutes: vec!["3".to_string(), "18".to_string()],
        }])
    });

    let (status, content_type, body) = get(app_for(source), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, json!({"Richmond": ["3", "18"]}));
}

#[tokio::test]
async fn test_any_path_returns_departures() {
    let mut source = MockSource::new();
    source
        .expect_report()
        .times(2)
        .returning(|| EtdReport::Departures(Vec::new()));
    let app = app_for(source);

    let (status, _, body) = get(app.clone(), "/favicon.ico").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _, body) = get(app, "/some/deep/path?x=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_error_is_still_200() {
    let mut source = MockSource::new();
    source
        .expect_report()
        .returning(|| EtdReport::error("No station data found"));

    let (status, _, body) = get(app_for(source), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Error": "No station data found"}));
}

#[tokio::test]
async fn test_health_does_not_call_source() {
    let mut source = MockSource::new();
    source.expect_report().never();

    let (status, _, body) = get(app_for(source), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_post_is_rejected() {
    let mut source = MockSource::new();
    source.expect_report().never();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app_for(source).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// End to end against a fake BART API
// =============================================================================

#[tokio::test]
async fn test_bart_client_sends_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETD_PATH))
        .and(query_param("cmd", "etd"))
        .and(query_param("orig", "embr"))
        .and(query_param("key", "test-key"))
        .and(query_param("dir", "s"))
        .and(query_param("json", "y"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMBARCADERO))
        .expect(1)
        .mount(&server)
        .await;

    let client = BartClient::new(upstream_config(&server)).unwrap();
    let (status, _, body) = get(app_for(client), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Daly City": ["Leaving", "12"], "SF Airport": ["5"]}));
}

#[tokio::test]
async fn test_bart_missing_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message": "Invalid key"}"#))
        .mount(&server)
        .await;

    let client = BartClient::new(upstream_config(&server)).unwrap();
    let (_, _, body) = get(app_for(client), "/").await;

    assert_eq!(body, json!({"Error": "No 'root' object found in API response"}));
}

#[tokio::test]
async fn test_bart_missing_departures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETD_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"root": {"station": [{"name": "Embarcadero"}]}}"#),
        )
        .mount(&server)
        .await;

    let client = BartClient::new(upstream_config(&server)).unwrap();
    let (_, _, body) = get(app_for(client), "/").await;

    assert_eq!(body, json!({"Error": "No departure times found"}));
}

#[tokio::test]
async fn test_bart_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETD_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = BartClient::new(upstream_config(&server)).unwrap();
    let (status, _, body) = get(app_for(client), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Error": "expected value at line 1 column 1"}));
}

#[tokio::test]
async fn test_bart_timeout_hides_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ETD_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(EMBARCADERO)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = BartClient::new(upstream_config(&server)).unwrap();
    let (status, _, body) = get(app_for(client), "/").await;

    assert_eq!(status, StatusCode::OK);
    let message = body["Error"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains("test-key"));
}
