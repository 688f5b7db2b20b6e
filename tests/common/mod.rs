#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use moodmeet::{AppState, router};
use moodmeet_event::icebreaker::FallbackIcebreaker;
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use temp_dir::TempDir;
use tower::ServiceExt;

pub const PASSWORD: &str = "my_password";

pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    moodmeet_db::migrate(&pool).await.unwrap();
    moodmeet_event::Command(pool.clone())
        .seed_samples()
        .await
        .unwrap();

    pool
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub uploads: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let pool = setup_test_pool().await;
    let uploads = TempDir::new().unwrap();
    let state = AppState::new(pool.clone(), Arc::new(FallbackIcebreaker), uploads.path());

    TestApp {
        router: router(state),
        pool,
        uploads,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, body.to_vec())
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let (status, body) = self.send(request).await;
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, Some(body)).await
    }

    pub async fn html(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = self.send(request).await;

        (status, String::from_utf8(body).unwrap())
    }

    /// Registers `{name}@moodmeet.localhost` and returns the new id.
    pub async fn register(&self, name: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/register",
                serde_json::json!({
                    "email": format!("{name}@moodmeet.localhost"),
                    "password": PASSWORD,
                    "name": name,
                }),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "{body}");

        body["user_id"].as_i64().unwrap()
    }

    pub async fn popularity(&self, event_id: i64) -> i64 {
        sqlx::query_scalar("SELECT popularity FROM event WHERE id = ?")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn event_id(&self, title: &str) -> i64 {
        sqlx::query_scalar("SELECT id FROM event WHERE title = ?")
            .bind(title)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
