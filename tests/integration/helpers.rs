//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use trivia_api::{AppState, build_app};
use trivia_core::config::{AppConfig, StoreProvider};
use trivia_database::{MemoryTriviaStore, TriviaStore};
use trivia_entity::question::Question;
use trivia_service::StdRandom;

/// Category ids of the standard set, by name.
pub const SCIENCE: i32 = 1;
pub const ART: i32 = 2;
pub const GEOGRAPHY: i32 = 3;
pub const HISTORY: i32 = 4;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for fixtures and direct checks
    pub store: MemoryTriviaStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create an app over the six standard categories and no questions.
    pub fn new() -> Self {
        Self::with_store(MemoryTriviaStore::with_standard_categories())
    }

    /// Create an app with no categories and no questions.
    pub fn empty() -> Self {
        Self::with_store(MemoryTriviaStore::new())
    }

    fn with_store(store: MemoryTriviaStore) -> Self {
        let mut config = AppConfig::default();
        config.store.provider = StoreProvider::Memory;
        config.quiz.seed = Some(7);

        let state = AppState::with_random(
            config.clone(),
            Arc::new(store.clone()),
            Arc::new(StdRandom::seeded(7)),
        );

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// Store a question with a fixed id.
    pub async fn seed_question(&self, id: i32, text: &str, category: i32) {
        self.store
            .put_question(Question {
                id,
                question: text.to_string(),
                answer: format!("Answer {id}"),
                difficulty: Some(id % 5 + 1),
                category: Some(category),
            })
            .await;
    }

    /// Store questions `1..=count`, cycling through the first four categories.
    pub async fn seed_questions(&self, count: i32) {
        for id in 1..=count {
            let category = [SCIENCE, ART, GEOGRAPHY, HISTORY][(id as usize - 1) % 4];
            self.seed_question(id, &format!("Question number {id}"), category)
                .await;
        }
    }

    /// Whether the store holds no questions.
    pub async fn store_is_empty(&self) -> bool {
        self.store
            .list_questions()
            .await
            .expect("Failed to list questions")
            .is_empty()
    }

    /// Make a JSON request against the router.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str).await
    }

    /// Make a request with a raw body, which need not be valid JSON.
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self.send(req).await;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Send a prepared request and return the raw response.
    pub async fn send(&self, req: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Ids of the questions in the body, in order.
    pub fn question_ids(&self) -> Vec<i64> {
        self.body["questions"]
            .as_array()
            .map(|qs| qs.iter().filter_map(|q| q["id"].as_i64()).collect())
            .unwrap_or_default()
    }

    /// Assert the standard error body for `status`.
    pub fn assert_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status, "body: {}", self.body);
        assert_eq!(self.body["success"], false);
        assert_eq!(self.body["error"], status.as_u16());
        assert_eq!(self.body["message"], message);
    }
}
