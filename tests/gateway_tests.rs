use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

mod common;

use common::{setup_client_with_token, setup_test_client};
use welfare_client::{RequestOptions, NETWORK_ERROR_MESSAGE, SERVER_ERROR_MESSAGE};

#[tokio::test]
async fn test_bearer_token_attached_outside_auth_prefix() {
    // A stored token must be attached as `Authorization: Bearer <token>` to
    // every path that is not under the auth prefix. The mock only matches
    // when the header is present, so a missing header fails the expect(1).
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client_with_token(&mock_server.uri(), "test-token");
    let outcome = client.issue("/api/v1/bookmarks", RequestOptions::get()).await;

    assert!(outcome.success);
    assert_eq!(outcome.status, 200);
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    // With nothing in the credential store the request goes out
    // unauthenticated; the server decides whether that is acceptable.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client.issue("/api/v1/bookmarks", RequestOptions::get()).await;
    assert!(outcome.success);

    let requests = mock_server
        .received_requests()
        .await
        .expect("failed to read recorded requests");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "no Authorization header may be sent when the store is empty"
    );
}

#[tokio::test]
async fn test_auth_prefix_paths_never_carry_token() {
    // Login/signup/logout must not carry a bearer token even when one is
    // stored (e.g. re-login over a stale session).
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "fresh"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client_with_token(&mock_server.uri(), "stale-token");
    let outcome = client
        .issue(
            "/api/v1/auth/login",
            RequestOptions::post().body(json!({"username": "a", "password": "b"})),
        )
        .await;
    assert!(outcome.success);

    let requests = mock_server
        .received_requests()
        .await
        .expect("failed to read recorded requests");
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "auth-prefixed paths must never carry a bearer token"
    );
}

#[tokio::test]
async fn test_login_without_stored_token_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"username": "a", "password": "b"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue(
            "/api/v1/auth/login",
            RequestOptions::post().body(json!({"username": "a", "password": "b"})),
        )
        .await;

    assert!(outcome.success);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_empty_success_body_normalizes_to_empty_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/bookmarks/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue("/api/v1/bookmarks/3", RequestOptions::delete())
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.status, 204);
    assert_eq!(outcome.data, Some(json!({})));
    assert_eq!(outcome.message, None);
}

#[tokio::test]
async fn test_success_body_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    let body = json!([{"id": 1, "policyId": 7}]);
    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client.issue("/api/v1/bookmarks", RequestOptions::get()).await;

    assert!(outcome.success);
    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.data, Some(body));
    assert_eq!(outcome.error, None);
}

#[tokio::test]
async fn test_http_error_uses_server_message_and_retains_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/bookmarks"))
        .and(body_json(json!({"policyId": 7})))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "already bookmarked"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue(
            "/api/v1/bookmarks",
            RequestOptions::post().body(json!({"policyId": 7})),
        )
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, 409);
    assert_eq!(outcome.message.as_deref(), Some("already bookmarked"));
    assert_eq!(outcome.error, Some(json!({"message": "already bookmarked"})));
    assert_eq!(outcome.data, None);
}

#[tokio::test]
async fn test_http_error_falls_back_to_error_field() {
    // `message` is checked first; a body with only `error` still yields the
    // server's own text.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/policies/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "no such policy"})))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue("/api/v1/policies/99", RequestOptions::get())
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, 404);
    assert_eq!(outcome.message.as_deref(), Some("no such policy"));
}

#[tokio::test]
async fn test_message_field_wins_over_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/policies/99"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "ERR_CODE_17", "message": "bad request"})),
        )
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue("/api/v1/policies/99", RequestOptions::get())
        .await;

    assert_eq!(outcome.message.as_deref(), Some("bad request"));
}

#[tokio::test]
async fn test_http_error_without_recognizable_text_gets_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/home/summary"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"trace": "at line 42"})))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue("/api/v1/home/summary", RequestOptions::get())
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, 500);
    assert_eq!(outcome.message.as_deref(), Some(SERVER_ERROR_MESSAGE));
    assert_eq!(outcome.error, Some(json!({"trace": "at line 42"})));
}

#[tokio::test]
async fn test_transport_failure_yields_status_zero() {
    // Port 9 (discard) is closed on the loopback interface, so the connect
    // is refused without a server ever answering.
    let client = setup_test_client("http://127.0.0.1:9");

    let outcome = client.issue("/api/v1/bookmarks", RequestOptions::get()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.data, None);
    assert_eq!(outcome.message.as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_malformed_body_is_treated_like_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/home/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue("/api/v1/home/summary", RequestOptions::get())
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, 0);
    assert_eq!(outcome.data, None);
    assert_eq!(outcome.message.as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

/// Responder that echoes the request body back, for round-trip checks.
struct EchoBody;

impl Respond for EchoBody {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(request.body.clone(), "application/json")
    }
}

#[tokio::test]
async fn test_body_round_trips_through_the_gateway() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/chat"))
        .respond_with(EchoBody)
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = json!({
        "message": "what heating subsidies exist?",
        "context": {"region": "Seoul", "turn": 3}
    });

    let client = setup_test_client(&mock_server.uri());
    let outcome = client
        .issue("/api/v1/chat", RequestOptions::post().body(body.clone()))
        .await;

    assert!(outcome.success);
    assert_eq!(outcome.data, Some(body));
}

#[tokio::test]
async fn test_absent_query_values_are_omitted() {
    // An absent filter must not appear in the query string at all, never as
    // a literal "undefined"-style placeholder.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/policies"))
        .and(query_param("keyword", "heating"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let options = RequestOptions::get()
        .query_opt("keyword", Some("heating"))
        .query_opt("category", None::<&str>);
    let outcome = client.issue("/api/v1/policies", options).await;

    assert!(outcome.success);
}

#[tokio::test]
async fn test_extra_headers_merge_over_defaults() {
    use reqwest::header::{HeaderName, HeaderValue};

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/home/summary"))
        .and(header("x-app-version", "2.1.0"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let options = RequestOptions::get().header(
        HeaderName::from_static("x-app-version"),
        HeaderValue::from_static("2.1.0"),
    );
    let outcome = client.issue("/api/v1/home/summary", options).await;

    assert!(outcome.success);
}

#[tokio::test]
async fn test_unjoinable_path_resolves_to_failed_outcome() {
    // issue() must not panic or return Err even for paths the URL parser
    // rejects; the failure is reported through the outcome shape.
    let client = setup_test_client("http://127.0.0.1:9");

    let outcome = client.issue("http://[/broken", RequestOptions::get()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.status, 0);
    assert!(outcome.message().contains("Invalid request path"));
}
