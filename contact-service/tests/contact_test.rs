mod common;

use common::{ada, TestApp};
use contact_service::services::StoreMode;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn valid_contact_message_is_saved() {
    let app = TestApp::spawn().await;

    let (status, body) = app.post_json("/api/contact", &ada()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Message saved successfully!" })
    );

    let stored = app.store.messages().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].first_name, "Ada");
    assert_eq!(stored[0].last_name, "Lovelace");
    assert_eq!(stored[0].email, "ada@example.com");
    assert_eq!(stored[0].message, "Hello");
    assert!(stored[0].id.is_some());
}

#[tokio::test]
async fn empty_email_is_rejected_without_a_write() {
    let app = TestApp::spawn().await;
    let mut payload = ada();
    payload["email"] = json!("");

    let (status, body) = app.post_json("/api/contact", &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "All fields are required." })
    );
    assert!(app.store.messages().await.is_empty());
}

#[tokio::test]
async fn every_missing_or_null_field_gets_the_same_rejection() {
    let app = TestApp::spawn().await;

    for field in ["firstName", "lastName", "email", "message"] {
        let mut absent = ada();
        absent.as_object_mut().unwrap().remove(field);
        let mut null = ada();
        null[field] = serde_json::Value::Null;

        for payload in [absent, null] {
            let (status, body) = app.post_json("/api/contact", &payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "field: {}", field);
            assert_eq!(body["error"], "All fields are required.");
            assert_eq!(body["success"], false);
        }
    }

    assert!(app.store.messages().await.is_empty());
}

#[tokio::test]
async fn non_json_body_is_rejected_with_uniform_payload() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("{}/api/contact", app.address))
        .header("content-type", "application/json")
        .body("firstName=Ada")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": false, "error": "All fields are required." })
    );
    assert!(app.store.messages().await.is_empty());
}

#[tokio::test]
async fn values_are_stored_verbatim_and_extra_fields_dropped() {
    let app = TestApp::spawn().await;
    let payload = json!({
        "firstName": "  Ada",
        "lastName": "LOVELACE ",
        "email": "not-an-email",
        "message": " ",
        "company": "Analytical Engines Ltd"
    });

    let (status, _) = app.post_json("/api/contact", &payload).await;
    assert_eq!(status, StatusCode::OK);

    let stored = app.store.messages().await;
    assert_eq!(stored[0].first_name, "  Ada");
    assert_eq!(stored[0].last_name, "LOVELACE ");
    assert_eq!(stored[0].email, "not-an-email");
    assert_eq!(stored[0].message, " ");
}

#[tokio::test]
async fn resubmitting_creates_a_record_each_time() {
    let app = TestApp::spawn().await;

    for _ in 0..3 {
        let (status, _) = app.post_json("/api/contact", &ada()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let stored = app.store.messages().await;
    assert_eq!(stored.len(), 3);
    assert_ne!(stored[0].id, stored[1].id);
    assert!(app.store.form_data().await.is_empty());
}

#[tokio::test]
async fn unreachable_store_yields_500_with_generic_error() {
    let app = TestApp::spawn().await;
    app.set_store_mode(StoreMode::Unavailable).await;

    let (status, body) = app.post_json("/api/contact", &ada()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to save message" })
    );
    assert!(app.store.messages().await.is_empty());
}

#[tokio::test]
async fn hung_write_is_cut_off_by_the_write_timeout() {
    let app = TestApp::spawn_with_timeout(Duration::from_millis(100)).await;
    app.set_store_mode(StoreMode::Stalled).await;

    let (status, body) = app.post_json("/api/contact", &ada()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save message");
    assert!(app.store.messages().await.is_empty());
}
