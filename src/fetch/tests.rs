//! Tests for the post-fetch client

use super::*;
use crate::error::Error;
use crate::types::PAGE_SIZE;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn todo_array(start: u64, count: u64) -> serde_json::Value {
    json!((start..start + count)
        .map(|id| json!({
            "userId": 1 + id / 20,
            "id": id,
            "title": format!("todo {id}"),
            "completed": id % 2 == 0
        }))
        .collect::<Vec<_>>())
}

fn client_for(server: &MockServer) -> TodoClient {
    TodoClient::with_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn test_fetch_page_decodes_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("_page", "1"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_array(1, 10)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fetch = client.fetch_page(1, PAGE_SIZE).await.unwrap();

    assert_eq!(fetch.records.len(), 10);
    assert_eq!(fetch.records[0].id, 1);
    assert_eq!(fetch.records[0].title, "todo 1");
    assert_eq!(fetch.total_count, None);
    assert!(fetch.is_full());
}

#[tokio::test]
async fn test_fetch_page_sends_page_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("_page", "3"))
        .and(query_param("_limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todo_array(21, 5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fetch = client.fetch_page(3, PAGE_SIZE).await.unwrap();

    assert_eq!(fetch.records.len(), 5);
    assert!(!fetch.is_full());
}

#[tokio::test]
async fn test_fetch_page_reads_total_count_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(todo_array(1, 10))
                .insert_header("X-Total-Count", "25"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fetch = client.fetch_page(1, PAGE_SIZE).await.unwrap();

    assert_eq!(fetch.total_count, Some(25));
}

#[tokio::test]
async fn test_fetch_page_unparseable_total_count_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(todo_array(1, 10))
                .insert_header("X-Total-Count", "lots"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let fetch = client.fetch_page(1, PAGE_SIZE).await.unwrap();

    assert_eq!(fetch.total_count, None);
}

#[tokio::test]
async fn test_fetch_page_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "an array"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_page(1, PAGE_SIZE).await;

    assert!(matches!(result.unwrap_err(), Error::Malformed { .. }));
}

#[tokio::test]
async fn test_fetch_page_missing_record_field_is_malformed() {
    let mock_server = MockServer::start().await;

    // "completed" missing from the second record
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"userId": 1, "id": 1, "title": "ok", "completed": true},
            {"userId": 1, "id": 2, "title": "broken"}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_page(1, PAGE_SIZE).await;

    assert!(matches!(result.unwrap_err(), Error::Malformed { .. }));
}

#[tokio::test]
async fn test_fetch_page_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_page(1, PAGE_SIZE).await;

    let err = result.unwrap_err();
    assert!(err.is_fetch_error());
    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_page_network_error() {
    // Nothing listens here
    let client = TodoClient::with_base_url("http://127.0.0.1:1").unwrap();
    let result = client.fetch_page(1, PAGE_SIZE).await;

    let err = result.unwrap_err();
    assert!(err.is_fetch_error());
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_fetch_page_idempotent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .and(query_param("_page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(todo_array(11, 10))
                .insert_header("X-Total-Count", "30"),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = client.fetch_page(2, PAGE_SIZE).await.unwrap();
    let second = client.fetch_page(2, PAGE_SIZE).await.unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_with_base_url_rejects_garbage() {
    let result = TodoClient::with_base_url("not a url");
    assert!(matches!(result.unwrap_err(), Error::InvalidUrl(_)));
}
