//! Test harness: a seeded catalog in a temporary SQLite file behind the full router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use catalog_api::{app_router, seed_catalog, AppState, SeedReport, Store};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: AppState,
    pub seed: SeedReport,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

#[allow(dead_code)]
impl TestApp {
    /// Fresh database loaded with the sample catalog.
    pub async fn seeded() -> Self {
        Self::with_body_limit(1024 * 1024).await
    }

    /// Seeded app whose router caps request bodies at `max_body_bytes`.
    pub async fn with_body_limit(max_body_bytes: usize) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let store = Store::open(temp_dir.path().join("catalog.db"))
            .await
            .expect("Failed to open store");
        let seed = seed_catalog(store.pool()).await.expect("Failed to seed catalog");
        let state = AppState::new(store);
        let router = app_router(state.clone(), max_body_bytes);
        Self {
            router,
            state,
            seed,
            _temp_dir: temp_dir,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        self.dispatch(builder.body(body).unwrap()).await
    }

    /// Send a raw body with a JSON content type, for malformed-input tests.
    pub async fn send_raw(&self, method: &str, uri: &str, raw: &'static str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(raw))
            .unwrap();
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send("GET", uri, None).await
    }

    /// Id of the listed product with this name.
    pub async fn product_id(&self, name: &str) -> i64 {
        let list = self.get("/api/products").await;
        list.body
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == name)
            .unwrap_or_else(|| panic!("product {} not listed", name))["id"]
            .as_i64()
            .unwrap()
    }

    pub async fn count(&self, sql: &str) -> i64 {
        sqlx::query_scalar(sql)
            .fetch_one(self.state.store.pool())
            .await
            .unwrap()
    }
}

#[allow(dead_code)]
impl TestResponse {
    /// Asserts a JSON `{error}` body and returns the message.
    pub fn error(&self) -> &str {
        assert!(
            self.content_type.as_deref().unwrap_or("").contains("json"),
            "expected JSON error body, got {:?}",
            self.content_type
        );
        self.body["error"]
            .as_str()
            .unwrap_or_else(|| panic!("missing error field in {}", self.body))
    }
}
