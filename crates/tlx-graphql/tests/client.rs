use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use tlx_auth::{AccessToken, TokenStore};
use tlx_graphql::{GraphqlClient, GraphqlClientBuilder, GraphqlClientError, GraphqlOperation};

#[derive(Debug, Clone, Serialize)]
struct EmptyVars {}

#[derive(Debug, Clone, Deserialize)]
struct ViewerResponse {
    viewer: Viewer,
}

#[derive(Debug, Clone, Deserialize)]
struct Viewer {
    id: String,
}

struct ViewerQuery;

impl GraphqlOperation for ViewerQuery {
    type Variables = EmptyVars;
    type ResponseData = ViewerResponse;

    const QUERY: &'static str = "query Viewer { viewer { id } }";
    const OPERATION_NAME: &'static str = "Viewer";
}

struct CountingResponder {
    counter: Arc<AtomicUsize>,
    body: serde_json::Value,
}

impl Respond for CountingResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.counter.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(self.body.clone())
    }
}

fn client_for(server: &MockServer, tokens: TokenStore) -> GraphqlClient {
    GraphqlClientBuilder::new(server.uri())
        .with_service_name("test")
        .build(tokens)
        .expect("client")
}

#[tokio::test]
async fn execute_query_success() {
    let server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "query": ViewerQuery::QUERY,
        "operationName": ViewerQuery::OPERATION_NAME,
        "variables": {},
    });
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"viewer": {"id": "user-1"}}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, TokenStore::new());
    let response = client
        .execute::<ViewerQuery>(EmptyVars {})
        .await
        .expect("query should succeed");

    assert!(response.is_ok());
    assert_eq!(response.data.expect("missing data").viewer.id, "user-1");

    let metrics = client.metrics();
    assert_eq!(metrics.requests_total, 1);
    assert_eq!(metrics.requests_success, 1);
    assert_eq!(metrics.requests_error, 0);
}

#[tokio::test]
async fn authorization_header_is_read_fresh_per_request() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"data": {"viewer": {"id": "user-1"}}});

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Authorization", "Bearer first-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Authorization", "Bearer second-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = TokenStore::new();
    tokens.set(AccessToken::new("first-token"));
    let client = client_for(&server, tokens.clone());

    client
        .execute::<ViewerQuery>(EmptyVars {})
        .await
        .expect("first request");

    // a token replaced mid-session must be picked up without rebuilding
    tokens.set(AccessToken::new("second-token"));
    client
        .execute::<ViewerQuery>(EmptyVars {})
        .await
        .expect("second request");

    server.verify().await;
}

#[tokio::test]
async fn http_unauthorized_maps_to_typed_variant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server, TokenStore::new());
    let err = client
        .execute::<ViewerQuery>(EmptyVars {})
        .await
        .expect_err("401 must be an error");

    assert!(err.is_unauthorized());
    assert_eq!(client.metrics().requests_unauthorized, 1);
}

#[tokio::test]
async fn graphql_error_with_expired_marker_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{"message": "jwt expired"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, TokenStore::new());
    let err = client
        .execute_strict::<ViewerQuery>(EmptyVars {})
        .await
        .expect_err("expired token must be an error");

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn graphql_validation_error_is_operation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{"message": "name must not be empty"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, TokenStore::new());
    let err = client
        .execute_strict::<ViewerQuery>(EmptyVars {})
        .await
        .expect_err("validation error expected");

    assert!(matches!(err, GraphqlClientError::Operation { .. }));
    assert_eq!(err.message(), "name must not be empty");
    assert_eq!(client.metrics().requests_error, 1);
}

#[tokio::test]
async fn server_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server, TokenStore::new());
    let err = client
        .execute::<ViewerQuery>(EmptyVars {})
        .await
        .expect_err("503 must be an error");

    match err {
        GraphqlClientError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn client_never_mutates_the_token_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let tokens = TokenStore::new();
    tokens.set(AccessToken::new("still-here"));
    let client = client_for(&server, tokens.clone());

    let _ = client.execute::<ViewerQuery>(EmptyVars {}).await;
    assert_eq!(tokens.get().unwrap().as_str(), "still-here");
}

#[tokio::test]
async fn execute_value_round_trips_untyped_payloads() {
    let server = MockServer::start().await;
    let counter = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(CountingResponder {
            counter: counter.clone(),
            body: serde_json::json!({"data": {"ping": "pong"}}),
        })
        .mount(&server)
        .await;

    let client = client_for(&server, TokenStore::new());
    let response = client
        .execute_value("query Ping { ping }", serde_json::json!({}))
        .await
        .expect("untyped query");

    assert_eq!(
        response.data.unwrap().get("ping").and_then(serde_json::Value::as_str),
        Some("pong")
    );
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn invalid_endpoint_is_rejected_at_build_time() {
    let err = GraphqlClientBuilder::new("not a url")
        .build(TokenStore::new())
        .expect_err("invalid endpoint must fail");
    assert!(matches!(err, GraphqlClientError::Protocol { .. }));
}
