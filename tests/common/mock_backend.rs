//! Mock projects API for exercising the HTTP path end to end.
//!
//! Only `GET /ps/projects` is routed; any other method or path gets axum's
//! 405/404 and is not recorded.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use showcase::api::PROJECTS_PATH;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Canned answer for one request. Unqueued requests get an empty list.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    /// OK response listing `(id, name, image_url)` records.
    pub fn projects(records: &[(&str, &str, &str)]) -> Self {
        let projects: Vec<serde_json::Value> = records
            .iter()
            .map(|(id, name, image_url)| {
                serde_json::json!({ "id": id, "name": name, "image_url": image_url })
            })
            .collect();
        Self::json(&serde_json::json!({ "projects": projects }).to_string())
    }

    /// Non-2xx answer; the body is irrelevant to the client.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::json("{}")
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    /// `category` query value of each request, in arrival order.
    categories: Arc<Mutex<Vec<Option<String>>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockProjectsApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockProjectsApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route(PROJECTS_PATH, get(list_projects))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Queue the answer for the next request.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// Categories requested so far; `None` when the parameter was missing.
    pub async fn requested_categories(&self) -> Vec<Option<String>> {
        self.state.categories.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockProjectsApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn list_projects(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state
        .categories
        .lock()
        .await
        .push(params.get("category").cloned());

    let resp = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(r#"{"projects": []}"#));

    if resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
    }

    let status = StatusCode::from_u16(resp.status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], resp.body).into_response()
}
