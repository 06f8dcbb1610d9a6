//! Integration tests using mock HTTP server
//!
//! Tests the full flow: HTTP endpoint → page fetcher → infinite list → rendering

use applications_feed::api::ApplicationsApi;
use applications_feed::feed::{page_stream, FetchOutcome, InfiniteList, ListStatus};
use applications_feed::render::render_list;
use applications_feed::ClientConfig;
use futures::TryStreamExt;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn application(id: i64, company: &str) -> Value {
    json!({
        "id": id,
        "first_name": "Jane",
        "last_name": "Smith",
        "loan_amount": 100500,
        "loan_type": "Flexi-Loan",
        "email": "jane@example.com",
        "company": company,
        "date_created": "2021-08-10T00:00:00.000Z",
        "expiry_date": "2022-01-10T00:00:00.000Z",
        "avatar": "https://example.com/avatar2.jpg",
        "loan_history": []
    })
}

fn next_link(server: &MockServer, page: u32) -> String {
    format!(
        r#"<{}/api/applications?_page=1&_limit=2>; rel="first", <{}/api/applications?_page={page}&_limit=2>; rel="next""#,
        server.uri(),
        server.uri()
    )
}

async fn mount_page(server: &MockServer, page: u32, body: Value, link: Option<String>) {
    let mut response = ResponseTemplate::new(200).set_body_json(body);
    if let Some(link) = link {
        response = response.insert_header("Link", link.as_str());
    }

    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .and(query_param("_page", page.to_string()))
        .and(query_param("_limit", "2"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

fn api_for(server: &MockServer) -> Arc<ApplicationsApi> {
    let config = ClientConfig {
        base_url: format!("{}/api", server.uri()),
        page_size: 2,
        ..ClientConfig::default()
    };
    Arc::new(ApplicationsApi::with_config(config.http_config()).unwrap())
}

// ============================================================================
// Infinite List over HTTP
// ============================================================================

#[tokio::test]
async fn test_infinite_list_loads_pages_in_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        json!([application(1, "Company 1"), application(2, "Company 2")]),
        Some(next_link(&server, 2)),
    )
    .await;
    mount_page(&server, 2, json!([application(3, "Company 3")]), None).await;

    let list = InfiniteList::start(api_for(&server), 2).await;
    assert!(list.has_next_page().await);

    let rendered = render_list(&list.snapshot().await);
    assert!(rendered.contains("Company 1"));
    assert!(rendered.contains("£100,500"));
    assert!(rendered.contains("10-08-2021"));
    assert!(rendered.contains("[Load more]"));

    let outcome = list.fetch_next().await;
    assert_eq!(
        outcome,
        FetchOutcome::Appended {
            page: 2,
            items: 1,
            has_next_page: false
        }
    );

    let snapshot = list.snapshot().await;
    let companies: Vec<_> = snapshot.items.iter().map(|a| a.company.as_str()).collect();
    assert_eq!(companies, vec!["Company 1", "Company 2", "Company 3"]);
    assert!(!snapshot.has_next_page);
    assert!(!render_list(&snapshot).contains("Load more"));

    // No further page: nothing is requested
    assert_eq!(list.fetch_next().await, FetchOutcome::Skipped);
}

#[tokio::test]
async fn test_in_flight_guard_with_slow_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([application(1, "Slow Co")]))
                .insert_header("Link", r#"<x>; rel="next""#)
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = InfiniteList::spawn(api_for(&server), 2).await;
    assert_eq!(list.status().await, ListStatus::LoadingInitial);

    assert_eq!(list.fetch_next().await, FetchOutcome::Skipped);
    assert_eq!(list.fetch_next().await, FetchOutcome::Skipped);

    while list.status().await.is_loading() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(list.status().await, ListStatus::Ready);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_keeps_first_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        json!([application(1, "Company 1"), application(2, "Company 2")]),
        Some(next_link(&server, 2)),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .and(query_param("_page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let list = InfiniteList::start(api_for(&server), 2).await;
    let outcome = list.fetch_next().await;

    assert_eq!(
        outcome,
        FetchOutcome::Failed("Failed to fetch applications: Internal Server Error".into())
    );

    let snapshot = list.snapshot().await;
    assert_eq!(snapshot.status, ListStatus::Error);
    assert_eq!(snapshot.items.len(), 2);
    assert!(render_list(&snapshot)
        .contains("Error loading applications: Failed to fetch applications: Internal Server Error"));
}

#[tokio::test]
async fn test_invalid_shape_reaches_list_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"applications": []})))
        .mount(&server)
        .await;

    let list = InfiniteList::start(api_for(&server), 2).await;
    let snapshot = list.snapshot().await;

    assert_eq!(snapshot.status, ListStatus::Error);
    assert_eq!(
        snapshot.error.as_deref(),
        Some("Invalid response: expected an array of applications")
    );
}

// ============================================================================
// Page Stream over HTTP
// ============================================================================

#[tokio::test]
async fn test_page_stream_follows_link_headers() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!([application(1, "A"), application(2, "B")]), Some(next_link(&server, 2))).await;
    mount_page(&server, 2, json!([application(3, "C"), application(4, "D")]), Some(next_link(&server, 3))).await;
    mount_page(&server, 3, json!([]), None).await;

    let pages: Vec<_> = page_stream(api_for(&server), 2).try_collect().await.unwrap();

    assert_eq!(pages.len(), 3);
    let ids: Vec<i64> = pages
        .iter()
        .flat_map(|p| p.items.iter().map(|a| a.id))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
