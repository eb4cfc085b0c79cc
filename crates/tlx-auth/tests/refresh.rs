use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use tlx_auth::{AccessToken, RecordingNavigator, RefreshError, TokenRefresher, TokenStore};

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

fn refresher_for(server: &MockServer) -> (TokenRefresher, TokenStore, Arc<RecordingNavigator>) {
    let tokens = TokenStore::new();
    let navigator = Arc::new(RecordingNavigator::new());
    let refresher = TokenRefresher::new(server.uri(), tokens.clone(), navigator.clone())
        .expect("refresher");
    (refresher, tokens, navigator)
}

#[tokio::test]
async fn refresh_success_persists_the_new_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(
            serde_json::json!({"query": "query RefreshToken { refreshToken }"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"refreshToken": "new-token"}
        })))
        .mount(&server)
        .await;

    let (refresher, tokens, navigator) = refresher_for(&server);
    tokens.set(AccessToken::new("old-token"));

    let token = refresher.refresh().await.expect("refresh should succeed");
    assert_eq!(token.as_str(), "new-token");
    assert_eq!(tokens.get().unwrap().as_str(), "new-token");
    assert_eq!(navigator.login_visits(), 0);
}

#[tokio::test]
async fn refresh_failure_clears_token_and_redirects_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (refresher, tokens, navigator) = refresher_for(&server);
    tokens.set(AccessToken::new("stale"));

    let err = refresher.refresh().await.expect_err("refresh should fail");
    assert!(matches!(err, RefreshError::RefreshFailed(_)));
    assert!(tokens.get().is_none());
    assert_eq!(navigator.login_visits(), 1);
}

#[tokio::test]
async fn refresh_with_empty_token_in_response_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"refreshToken": ""}
        })))
        .mount(&server)
        .await;

    let (refresher, tokens, navigator) = refresher_for(&server);
    let err = refresher.refresh().await.expect_err("empty token is a failure");
    assert!(matches!(err, RefreshError::RefreshFailed(_)));
    assert!(tokens.get().is_none());
    assert_eq!(navigator.login_visits(), 1);
}

#[tokio::test]
async fn refresh_error_entry_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{"message": "refresh session expired"}]
        })))
        .mount(&server)
        .await;

    let (refresher, _tokens, _navigator) = refresher_for(&server);
    let err = refresher.refresh().await.expect_err("refresh should fail");
    assert!(err.to_string().contains("refresh session expired"));
}

#[tokio::test]
async fn concurrent_refreshes_share_one_call() {
    let server = MockServer::start().await;
    let counter = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(CountingResponder {
            counter: counter.clone(),
            body: serde_json::json!({"data": {"refreshToken": "shared-token"}}),
        })
        .mount(&server)
        .await;

    let (refresher, tokens, _navigator) = refresher_for(&server);
    let (first, second) = tokio::join!(refresher.refresh(), refresher.refresh());

    assert_eq!(first.expect("first refresh").as_str(), "shared-token");
    assert_eq!(second.expect("second refresh").as_str(), "shared-token");
    assert_eq!(counter.load(Ordering::SeqCst), 1, "expected one refresh call");
    assert_eq!(tokens.get().unwrap().as_str(), "shared-token");
}

#[tokio::test]
async fn sequential_refreshes_issue_separate_calls() {
    let server = MockServer::start().await;
    let counter = Arc::new(AtomicUsize::new(0));
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(CountingResponder {
            counter: counter.clone(),
            body: serde_json::json!({"data": {"refreshToken": "again"}}),
        })
        .mount(&server)
        .await;

    let (refresher, _tokens, _navigator) = refresher_for(&server);
    refresher.refresh().await.expect("first refresh");
    refresher.refresh().await.expect("second refresh");
    assert_eq!(counter.load(Ordering::SeqCst), 2, "in-flight slot must reset");
}

#[tokio::test]
async fn repeated_failures_keep_clearing_idempotently() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (refresher, tokens, navigator) = refresher_for(&server);
    for _ in 0..2 {
        let _ = refresher.refresh().await;
    }
    assert!(tokens.get().is_none());
    assert_eq!(navigator.login_visits(), 2);
}
