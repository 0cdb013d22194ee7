//! API integration tests
//!
//! These run against a live server with a fresh database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a book and return its JSON body
async fn create_book(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_inventory() {
    let client = Client::new();

    let body = create_book(
        &client,
        json!({
            "book_name": "Clean Code",
            "book_category": "tech",
            "transaction_type": "venta",
            "price": 15000,
            "status": false,
            "stock": 3
        }),
    )
    .await;

    assert!(body["id"].is_number());
    assert_eq!(body["book_name"], "Clean Code");
    // Legacy spelling normalizes to the canonical form
    assert_eq!(body["transaction_type"], "sale");
    assert_eq!(body["inventory"]["available_quantity"], 3);

    // The created id resolves via point lookup
    let id = body["id"].as_i64().unwrap();
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["inventory"]["available_quantity"], 3);
    assert_eq!(fetched["status"], true);
}

#[tokio::test]
#[ignore]
async fn test_create_book_invalid_transaction_kind() {
    let client = Client::new();

    let list_before: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let count_before = list_before["books"].as_array().unwrap().len();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "book_name": "Some Book",
            "book_category": "tech",
            "transaction_type": "alquiler",
            "price": 100,
            "stock": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());

    // Catalog size unchanged
    let list_after: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(list_after["books"].as_array().unwrap().len(), count_before);
}

#[tokio::test]
#[ignore]
async fn test_create_book_negative_price() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "book_name": "Some Book",
            "book_category": "tech",
            "transaction_type": "sale",
            "price": -1,
            "stock": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_stock_rederives_status() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "book_name": "Clean Code",
            "book_category": "tech",
            "transaction_type": "venta",
            "price": 15000,
            "status": false,
            "stock": 3
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Zero the stock: status must flip to false
    let response = client
        .patch(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "stock": 0 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], false);
    assert_eq!(body["inventory"]["available_quantity"], 0);

    // Price-only patch leaves inventory untouched
    let response = client
        .patch(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "price": 12000 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["price"], 12000);
    assert_eq!(body["inventory"]["available_quantity"], 0);
    assert_eq!(body["status"], false);
}

#[tokio::test]
#[ignore]
async fn test_stock_wins_over_explicit_status() {
    let client = Client::new();

    let created = create_book(
        &client,
        json!({
            "book_name": "Refactoring",
            "book_category": "tech",
            "transaction_type": "rental",
            "price": 9000,
            "stock": 2
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = client
        .patch(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({ "status": true, "stock": 0 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], false);
}

#[tokio::test]
#[ignore]
async fn test_list_books_availability_filter() {
    let client = Client::new();

    create_book(
        &client,
        json!({
            "book_name": "In Stock",
            "book_category": "tech",
            "transaction_type": "sale",
            "price": 100,
            "stock": 4
        }),
    )
    .await;
    create_book(
        &client,
        json!({
            "book_name": "Out Of Stock",
            "book_category": "tech",
            "transaction_type": "sale",
            "price": 100,
            "stock": 0
        }),
    )
    .await;

    let all: Value = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let available: Value = client
        .get(format!("{}/books?status=true", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let all_books = all["books"].as_array().unwrap();
    let available_books = available["books"].as_array().unwrap();

    // Filtered list is exactly the available subset, in ascending id order
    let expected: Vec<i64> = all_books
        .iter()
        .filter(|b| b["inventory"]["available_quantity"].as_i64().unwrap() > 0)
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    let got: Vec<i64> = available_books
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert_eq!(got, expected);
    let mut sorted = got.clone();
    sorted.sort();
    assert_eq!(got, sorted);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_book_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_user_registration_and_balance() {
    let client = Client::new();

    let email = format!("student{}@usm.cl", std::process::id());
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": email,
            "password": "secret",
            "usm_pesos": 1000
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let user_id = body["user_id"].as_i64().unwrap();

    // Relative adjustment, can be negative
    let response = client
        .patch(format!("{}/users/{}/usm_pesos", BASE_URL, user_id))
        .json(&json!({ "amount": -250 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let user: Value = client
        .get(format!("{}/users/{}", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(user["usm_pesos"], 750);
    // Passwords are never serialized out
    assert!(user.get("password").is_none());
}

#[tokio::test]
#[ignore]
async fn test_user_login() {
    let client = Client::new();

    let email = format!("login{}@usm.cl", std::process::id());
    client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": &email,
            "password": "secret"
        }))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .post(format!("{}/users/login", BASE_URL))
        .json(&json!({ "email": &email, "password": "secret" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/users/login", BASE_URL))
        .json(&json!({ "email": &email, "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}
