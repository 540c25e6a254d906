//! In-process fake of the Hevy API that records every request it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

pub const API_KEY: &str = "test-key";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
pub struct FakeHevy {
    routes: Arc<Mutex<HashMap<(Method, String), CannedResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeHevy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.respond_raw(method, path, status, &body.to_string())
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.insert(method, path, CannedResponse {
            status,
            body: body.to_string(),
            delay: None,
        })
    }

    pub fn respond_after(&self, method: Method, path: &str, delay: Duration, body: Value) -> &Self {
        self.insert(method, path, CannedResponse {
            status: 200,
            body: body.to_string(),
            delay: Some(delay),
        })
    }

    fn insert(&self, method: Method, path: &str, canned: CannedResponse) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), canned);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn router(&self) -> Router {
        Router::new().fallback(handle).with_state(self.clone())
    }

    /// Serves on an ephemeral port of the current runtime and returns the base url.
    pub async fn serve(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// For blocking tests: the runtime must outlive the calls made against it.
    pub fn serve_in_background(&self) -> (tokio::runtime::Runtime, String) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        let base_url = runtime.block_on(self.serve());
        (runtime, base_url)
    }
}

async fn handle(
    State(fake): State<FakeHevy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    fake.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let canned = fake.routes.lock().unwrap().get(&(method, path)).cloned();
    let Some(canned) = canned else {
        return (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            json!({"message": "not found"}).to_string(),
        )
            .into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        StatusCode::from_u16(canned.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn workout_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Morning Workout",
        "routine_id": "r-1",
        "description": "desc",
        "start_time": "2021-09-14T12:00:00Z",
        "end_time": "2021-09-14T12:30:00Z",
        "updated_at": "2021-09-14T12:31:00Z",
        "created_at": "2021-09-14T12:00:00Z",
        "exercises": [{
            "index": 0,
            "title": "Bench Press (Barbell)",
            "notes": "",
            "exercise_template_id": "05293BCA",
            "supersets_id": null,
            "sets": [{
                "index": 0,
                "type": "normal",
                "weight_kg": 100,
                "reps": 10,
                "distance_meters": null,
                "duration_seconds": null,
                "rpe": 9.5,
                "custom_metric": null
            }]
        }]
    })
}

pub fn routine_json() -> Value {
    json!({
        "id": "r-1",
        "title": "Upper Body",
        "folder_id": null,
        "updated_at": "2021-09-14T12:31:00Z",
        "created_at": "2021-09-14T12:00:00Z",
        "exercises": [{
            "index": 0,
            "title": "Bench Press (Barbell)",
            "rest_seconds": 60,
            "notes": "",
            "exercise_template_id": "05293BCA",
            "supersets_id": null,
            "sets": [{
                "index": 0,
                "type": "normal",
                "weight_kg": 100,
                "reps": 10,
                "rep_range": null,
                "distance_meters": null,
                "duration_seconds": null,
                "rpe": null,
                "custom_metric": null
            }]
        }]
    })
}

pub fn folder_json(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "index": 0,
        "title": title,
        "updated_at": "2021-09-14T12:31:00Z",
        "created_at": "2021-09-14T12:00:00Z"
    })
}

pub fn template_json(id: &str, exercise_type: &str) -> Value {
    json!({
        "id": id,
        "title": "Bench Press (Barbell)",
        "type": exercise_type,
        "primary_muscle_group": "chest",
        "secondary_muscle_groups": ["triceps"],
        "is_custom": false
    })
}

pub fn history_json() -> Value {
    json!({
        "exercise_history": [{
            "workout_id": "w-1",
            "workout_title": "Morning Workout",
            "workout_start_time": "2021-09-14T12:00:00Z",
            "workout_end_time": "2021-09-14T12:30:00Z",
            "exercise_template_id": "05293BCA",
            "weight_kg": 100,
            "reps": 10,
            "distance_meters": null,
            "duration_seconds": null,
            "rpe": 9.5,
            "custom_metric": null,
            "set_type": "normal"
        }]
    })
}
