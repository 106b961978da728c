// Shared helpers: an in-process stand-in for the inference service
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use verivoice::detection::API_ENDPOINT;
use verivoice::{DetectionRequest, DetectionResponse, VoiceDetector};

pub const HUMAN_RESPONSE: &str = r#"{
    "status": "success",
    "language": "English",
    "classification": "HUMAN",
    "confidenceScore": 0.93,
    "explanation": "Natural breathing and pitch variation."
}"#;

pub const AI_RESPONSE: &str = r#"{
    "status": "success",
    "language": "Tamil",
    "classification": "AI_GENERATED",
    "confidenceScore": 0.871,
    "explanation": "Spectral artifacts typical of neural vocoders."
}"#;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    calls: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<serde_json::Value>>>,
}

pub struct MockService {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<serde_json::Value>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockService {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<serde_json::Value> {
        self.last_body.lock().unwrap().clone()
    }
}

impl Drop for MockService {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            tx.send(()).ok();
        }
    }
}

async fn handle_detection(State(state): State<MockState>, body: Bytes) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last_body.lock().unwrap() = serde_json::from_slice(&body).ok();
    (state.status, state.body).into_response()
}

/// Serve `response_body` with `response_status` on the detection endpoint
pub async fn start_mock_service(response_status: u16, response_body: &'static str) -> MockService {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let calls = Arc::new(AtomicUsize::new(0));
    let last_body = Arc::new(Mutex::new(None));

    let state = MockState {
        status: StatusCode::from_u16(response_status).unwrap(),
        body: response_body,
        calls: Arc::clone(&calls),
        last_body: Arc::clone(&last_body),
    };

    let app = Router::new()
        .route(API_ENDPOINT, post(handle_detection))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    MockService {
        base_url: format!("http://{}", addr),
        calls,
        last_body,
        shutdown_tx: Some(shutdown_tx),
    }
}

/// Detector that answers with a canned response and remembers what it saw
pub struct FakeDetector {
    response: DetectionResponse,
    pub requests: Mutex<Vec<DetectionRequest>>,
}

impl FakeDetector {
    pub fn new(response: DetectionResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl VoiceDetector for FakeDetector {
    async fn detect(&self, request: DetectionRequest, _credential: &str) -> DetectionResponse {
        self.requests.lock().unwrap().push(request);
        self.response.clone()
    }
}

pub fn human_response() -> DetectionResponse {
    serde_json::from_str(HUMAN_RESPONSE).unwrap()
}
