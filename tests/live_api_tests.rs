//! API tests against a live server.
//!
//! Start the server first, then run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:23242";

/// Put the server into a known empty state
async fn reset(client: &Client) {
    let response = client
        .post(format!("{}/reset", BASE_URL))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send reset request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_reset_reports_seed_counts() {
    let client = Client::new();

    let response = client
        .post(format!("{}/reset", BASE_URL))
        .json(&json!({
            "users": [{"id": 1, "name": "Test User"}],
            "books": [{"id": 1, "title": "Test Book"}],
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Database reset");
    assert_eq!(body["status"]["users"], 1);
    assert_eq!(body["status"]["books"], 1);

    reset(&client).await;
}

#[tokio::test]
#[ignore]
async fn test_full_loan_scenario() {
    let client = Client::new();
    reset(&client).await;

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({"id": 1, "name": "A"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({"id": 10, "title": "B"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/loans", BASE_URL))
        .json(&json!({"userId": 1, "bookId": 10}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/users/1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .delete(format!("{}/loans/1/10", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .delete(format!("{}/users/1", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    reset(&client).await;
}
