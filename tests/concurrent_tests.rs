use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_client_with_token;

#[tokio::test]
async fn test_concurrent_calls_complete_independently() {
    // A screen fires its fetches in parallel and merges whatever arrives;
    // there is no ordering guarantee between calls and no shared state
    // beyond the read-only token. The slow endpoint must not affect the
    // fast ones, and a failing endpoint must not poison its siblings.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/bookmarks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1, "policyId": 7}]))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/home/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"greeting": "hello"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Arc::new(setup_client_with_token(&mock_server.uri(), "jwt"));

    let bookmarks_task = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.bookmarks().list().await })
    };
    let summary_task = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.home().summary().await })
    };
    let notifications_task = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.notifications().list().await })
    };

    let (bookmarks, summary, notifications) = tokio::join!(
        bookmarks_task,
        summary_task,
        notifications_task
    );

    let bookmarks = bookmarks.expect("bookmarks task panicked");
    assert!(bookmarks.success);
    assert_eq!(bookmarks.data.unwrap()[0].policy_id, 7);

    let summary = summary.expect("summary task panicked");
    assert!(summary.success);
    assert_eq!(summary.data.unwrap().greeting.as_deref(), Some("hello"));

    let notifications = notifications.expect("notifications task panicked");
    assert!(!notifications.success);
    assert_eq!(notifications.status, 500);
    assert_eq!(notifications.message.as_deref(), Some("boom"));
}

#[tokio::test]
async fn test_token_reads_do_not_serialize_calls() {
    // Many concurrent calls all read the same stored token; every dispatched
    // request must carry it.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/policies/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = Arc::new(setup_client_with_token(&mock_server.uri(), "jwt"));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let client = Arc::clone(&client);
        tasks.push(tokio::spawn(async move {
            client.policies().recommendations().await
        }));
    }

    for task in tasks {
        let outcome = task.await.expect("task panicked");
        assert!(outcome.success);
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 8);
    for request in &requests {
        assert_eq!(
            request.headers.get("authorization").map(|v| v.to_str().unwrap()),
            Some("Bearer jwt")
        );
    }
}
