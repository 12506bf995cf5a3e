//! Test helpers: a fake backend served on an ephemeral port and recording
//! collaborators for the presentation handlers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use copmi_client::app::Notifier;
use copmi_client::services::storage::{MemoryStore, Session, SessionStore};
use copmi_client::ApiClient;
use parking_lot::Mutex;
use serde_json::json;

/// Serve `routes` under `/api` and return the API base URL.
pub async fn spawn_backend(routes: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new().nest("/api", routes);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend");
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn client(base_url: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (ApiClient::with_base_url(base_url, store.clone()), store)
}

pub fn logged_in_store(token: &str) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .set(&Session {
            token: token.to_string(),
            user: json!({ "id": 1, "username": "alice" }),
        })
        .expect("memory store never fails");
    store
}

/// Notifier that records every alert.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}
