#![allow(dead_code)]

use contact_service::config::{ContactConfig, MongoConfig};
use contact_service::services::{init_metrics, InMemoryStore, StoreMode};
use contact_service::startup::Application;
use reqwest::StatusCode;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Once};
use std::time::Duration;

static INIT_METRICS: Once = Once::new();

fn ensure_metrics_initialized() {
    INIT_METRICS.call_once(|| {
        init_metrics().expect("Failed to install metrics recorder");
    });
}

pub fn test_config(write_timeout: Duration) -> ContactConfig {
    ContactConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "info".to_string(),
        },
        mongodb: MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "contact_test".to_string(),
        },
        write_timeout,
    }
}

pub fn ada() -> Value {
    serde_json::json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "message": "Hello"
    })
}

pub fn bob() -> Value {
    serde_json::json!({
        "firstName": "Bob",
        "lastName": "Lee",
        "phone": "555-1234",
        "email": "bob@example.com",
        "message": "Hi"
    })
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_timeout(Duration::from_secs(5)).await
    }

    pub async fn spawn_with_timeout(write_timeout: Duration) -> Self {
        ensure_metrics_initialized();

        let store = Arc::new(InMemoryStore::new());
        let app = Application::build_with_store(test_config(write_timeout), store.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            store,
            client: reqwest::Client::new(),
        }
    }

    pub async fn set_store_mode(&self, mode: StoreMode) {
        self.store.set_mode(mode).await;
    }

    /// POST a JSON body and return the status and decoded response body.
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = response.json().await.expect("Failed to parse JSON");
        (status, body)
    }
}
