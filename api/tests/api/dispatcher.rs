use api::domain::environment::EnvironmentVariable;
use api::domain::request::{ApiRequest, HttpMethod};
use api::utilities::request::remove_duplicate_headers;
use api::PlaygroundError;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{request_to, spawn_test_app};

#[tokio::test]
async fn empty_url_fails_with_validation_error() {
    let test_app = spawn_test_app().await;
    let request = request_to("");
    let result = test_app.api.send_request(&request, &[]).await;
    assert!(matches!(result, Err(PlaygroundError::Validation(_))));
}

#[tokio::test]
async fn get_requests_never_carry_a_body() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.server)
        .await;

    let mut request = request_to(&format!("{}/json", test_app.server.uri()));
    request.body = String::from("{\"ignored\":true}");
    let response = test_app
        .api
        .send_request(&request, &[])
        .await
        .expect("request should succeed");
    assert_eq!(response.status, 200);

    let received = test_app
        .server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn post_requests_carry_the_body() {
    let test_app = spawn_test_app().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&test_app.server)
        .await;

    let mut request = request_to(&format!("{}/submit", test_app.server.uri()));
    request.method = HttpMethod::POST;
    request.body = String::from("{\"a\":1}");
    let response = test_app
        .api
        .send_request(&request, &[])
        .await
        .expect("request should succeed");
    assert_eq!(response.status, 201);

    let received = test_app
        .server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(received[0].body, b"{\"a\":1}");
}

#[tokio::test]
async fn json_bodies_are_parsed_and_sized_from_raw_text() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"a\":1}"))
        .mount(&test_app.server)
        .await;

    let request = request_to(&format!("{}/json", test_app.server.uri()));
    let response = test_app
        .api
        .send_request(&request, &[])
        .await
        .expect("request should succeed");
    assert_eq!(response.data, json!({"a": 1}));
    // byte length of the literal body, not a re-serialized length
    assert_eq!(response.size, 8);
}

#[tokio::test]
async fn malformed_bodies_degrade_to_raw_text() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&test_app.server)
        .await;

    let request = request_to(&format!("{}/text", test_app.server.uri()));
    let response = test_app
        .api
        .send_request(&request, &[])
        .await
        .expect("request should succeed");
    assert_eq!(response.data, Value::String(String::from("not json")));
    assert_eq!(response.size, 8);
}

#[tokio::test]
async fn request_headers_are_forwarded_verbatim() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.server)
        .await;

    let mut request = request_to(&format!("{}/secure", test_app.server.uri()));
    request.headers = vec![(String::from("x-api-key"), String::from("secret"))];
    let response = test_app
        .api
        .send_request(&request, &[])
        .await
        .expect("request should succeed");
    assert_eq!(response.status, 200);
}

#[test]
fn duplicate_header_keys_keep_the_first_occurrence_in_order() {
    let headers = vec![
        (String::from("x-api-key"), String::from("first")),
        (String::from("accept"), String::from("application/json")),
        (String::from("x-api-key"), String::from("second")),
    ];
    let unique = remove_duplicate_headers(headers);
    assert_eq!(
        unique,
        vec![
            (String::from("x-api-key"), String::from("first")),
            (String::from("accept"), String::from("application/json")),
        ]
    );
}

#[tokio::test]
async fn colliding_header_keys_resolve_to_the_first_occurrence() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/dedup"))
        .and(header("x-api-key", "first"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.server)
        .await;

    // Substitution can rewrite two distinct keys into the same one, so the
    // dispatcher itself must enforce first-occurrence-wins.
    let mut request = request_to(&format!("{}/dedup", test_app.server.uri()));
    request.headers = vec![
        (String::from("x-api-key"), String::from("first")),
        (String::from("{{key_alias}}"), String::from("second")),
    ];
    let variables = vec![EnvironmentVariable {
        key: String::from("key_alias"),
        value: String::from("x-api-key"),
    }];
    let response = test_app
        .api
        .send_request(&request, &variables)
        .await
        .expect("request should succeed");
    assert_eq!(response.status, 200);

    let received = test_app
        .server
        .received_requests()
        .await
        .expect("request recording is enabled");
    let sent_values: Vec<_> = received[0]
        .headers
        .get_all("x-api-key")
        .iter()
        .collect();
    assert_eq!(sent_values.len(), 1);
}

#[tokio::test]
async fn response_headers_are_captured() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/with-headers"))
        .respond_with(ResponseTemplate::new(200).insert_header("x-request-id", "abc-123"))
        .mount(&test_app.server)
        .await;

    let request = request_to(&format!("{}/with-headers", test_app.server.uri()));
    let response = test_app
        .api
        .send_request(&request, &[])
        .await
        .expect("request should succeed");
    assert!(response
        .headers
        .iter()
        .any(|(key, value)| key == "x-request-id" && value == "abc-123"));
}

#[tokio::test]
async fn env_vars_are_substituted_before_dispatch() {
    let test_app = spawn_test_app().await;
    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test_app.server)
        .await;

    let variables = vec![EnvironmentVariable {
        key: String::from("host"),
        value: test_app.server.uri(),
    }];
    let request = request_to("{{host}}/v1/ping");
    let response = test_app
        .api
        .send_request(&request, &variables)
        .await
        .expect("request should succeed");
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn network_failures_surface_as_network_errors() {
    let test_app = spawn_test_app().await;
    // nothing listens on this port
    let request: ApiRequest = request_to("http://127.0.0.1:1/unreachable");
    let result = test_app.api.send_request(&request, &[]).await;
    assert!(matches!(result, Err(PlaygroundError::Network(_))));
}
