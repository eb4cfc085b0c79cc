use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use tlx_api::operations::countries::{CountryInput, CountryList, CreateCountry};
use tlx_api::operations::PageVars;
use tlx_api::{ApiConfig, ApiContext};
use tlx_auth::{Navigator, RecordingNavigator, RouteAccess, REFRESH_QUERY};
use tlx_graphql::paginate_pages;

fn country_page(ids_and_names: &[(&str, &str)], page_number: u64, total_pages: u64) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "countryList": {
                "totalSize": ids_and_names.len(),
                "totalPages": total_pages,
                "pageSize": 10,
                "pageNumber": page_number,
                "data": ids_and_names
                    .iter()
                    .map(|(id, name)| serde_json::json!({
                        "_id": id,
                        "nameEn": name,
                        "nameAr": name,
                        "code": "XX",
                    }))
                    .collect::<Vec<_>>(),
            }
        }
    })
}

fn context_for(server: &MockServer) -> (ApiContext, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let nav: Arc<dyn Navigator> = navigator.clone();
    let context = ApiContext::new(ApiConfig::new(server.uri()), nav).expect("context");
    (context, navigator)
}

struct AuthGateResponder {
    counter: Arc<AtomicUsize>,
    body: serde_json::Value,
}

impl Respond for AuthGateResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let attempt = self.counter.fetch_add(1, Ordering::SeqCst);
        if attempt == 0 {
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "errors": [{"message": "jwt expired"}]
            }))
        } else {
            ResponseTemplate::new(200).set_body_json(self.body.clone())
        }
    }
}

#[tokio::test]
async fn country_list_first_page_renders_one_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({
            "operationName": "CountryList",
            "variables": {"page": 1},
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(country_page(&[("1", "Jordan")], 1, 1)),
        )
        .mount(&server)
        .await;

    let (context, _navigator) = context_for(&server);
    let executor = context.query::<CountryList>(PageVars { page: 1 });
    let snapshot = executor.start().await;

    assert!(snapshot.is_success);
    let page = snapshot.data.unwrap().country_list;
    assert_eq!(page.total_size, 1);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name_en, "Jordan");
}

#[tokio::test]
async fn login_follows_the_recorded_redirect_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({
            "operationName": "Authenticate",
            "variables": {"email": "ops@example.com"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"authenticate": "signed-token"}
        })))
        .mount(&server)
        .await;

    let (context, navigator) = context_for(&server);

    // an unauthenticated visit to a protected screen bounces to login
    assert_eq!(context.guard("/products"), RouteAccess::RedirectedToLogin);
    assert_eq!(navigator.login_visits(), 1);

    let session = context.session();
    let token = session
        .login("ops@example.com", "hunter2")
        .await
        .expect("login should succeed");
    assert_eq!(token.as_str(), "signed-token");
    assert_eq!(context.tokens().get().unwrap().as_str(), "signed-token");
    assert_eq!(
        navigator.last_visited().as_deref(),
        Some("/products"),
        "login must return to the recorded path"
    );

    // the redirect slot is transient: a second login lands on the default
    session.login("ops@example.com", "hunter2").await.expect("re-login");
    assert_eq!(navigator.last_visited().as_deref(), Some("/"));
}

#[tokio::test]
async fn login_failure_surfaces_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{"message": "Invalid credentials"}]
        })))
        .mount(&server)
        .await;

    let (context, _navigator) = context_for(&server);
    let err = context
        .session()
        .login("ops@example.com", "wrong")
        .await
        .expect_err("login should fail");

    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(context.tokens().get().is_none());
}

#[tokio::test]
async fn logout_clears_the_token_and_returns_to_login() {
    let server = MockServer::start().await;
    let (context, navigator) = context_for(&server);
    context
        .tokens()
        .set(tlx_auth::AccessToken::new("live-token"));

    context.session().logout();

    assert!(context.tokens().get().is_none());
    assert_eq!(navigator.login_visits(), 1);
    assert_eq!(context.guard("/login"), RouteAccess::Granted);
}

#[tokio::test]
async fn expired_session_recovers_transparently() {
    let server = MockServer::start().await;
    let op_calls = Arc::new(AtomicUsize::new(0));

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({"operationName": "CountryList"})))
        .respond_with(AuthGateResponder {
            counter: op_calls.clone(),
            body: country_page(&[("1", "Jordan")], 1, 1),
        })
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({"query": REFRESH_QUERY})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"refreshToken": "renewed"}
        })))
        .mount(&server)
        .await;

    let (context, navigator) = context_for(&server);
    context.tokens().set(tlx_auth::AccessToken::new("expired"));

    let snapshot = context
        .query::<CountryList>(PageVars { page: 1 })
        .start()
        .await;

    assert!(snapshot.is_success, "expired session should recover");
    assert_eq!(op_calls.load(Ordering::SeqCst), 2);
    assert_eq!(context.tokens().get().unwrap().as_str(), "renewed");
    assert_eq!(navigator.login_visits(), 0);
}

#[tokio::test]
async fn paginate_walks_every_country_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({"variables": {"page": 1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(country_page(
            &[("1", "Jordan"), ("2", "Egypt")],
            1,
            2,
        )))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({"variables": {"page": 2}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(country_page(
            &[("3", "Morocco")],
            2,
            2,
        )))
        .mount(&server)
        .await;

    let (context, _navigator) = context_for(&server);
    let client = context.client().clone();
    let countries = paginate_pages(1, None, |page| {
        let client = client.clone();
        async move {
            client
                .execute_strict::<CountryList>(PageVars { page })
                .await
                .map(|data| data.country_list)
        }
    })
    .await
    .expect("pagination should succeed");

    assert_eq!(
        countries.iter().map(|c| c.name_en.as_str()).collect::<Vec<_>>(),
        vec!["Jordan", "Egypt", "Morocco"]
    );
}

#[tokio::test]
async fn create_country_returns_the_new_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(serde_json::json!({
            "operationName": "CreateCountry",
            "variables": {"nameEn": "Jordan", "nameAr": "الأردن", "code": "JO"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"createCountry": {
                "_id": "42",
                "nameEn": "Jordan",
                "nameAr": "الأردن",
                "code": "JO",
            }}
        })))
        .mount(&server)
        .await;

    let (context, _navigator) = context_for(&server);
    let executor = context.mutation::<CreateCountry>();
    let created = executor
        .execute(CountryInput {
            name_en: "Jordan".to_string(),
            name_ar: "الأردن".to_string(),
            code: "JO".to_string(),
        })
        .await
        .expect("create should succeed");

    assert_eq!(created.create_country.id, "42");
    assert!(executor.is_success());
    assert!(executor.error().is_none());
}
