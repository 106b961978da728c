use super::state::AppState;
use crate::audio::SelectedFile;
use crate::detection::Language;
use crate::history::HistoryItem;
use crate::scanner::{DisplayMode, ScanError, ViewController};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SetLanguageRequest {
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetViewRequest {
    pub mode: DisplayMode,
}

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Original file name; its extension decides whether the file is accepted
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn scan_error_response(err: ScanError) -> Response {
    let status = match err {
        ScanError::NoFileSelected | ScanError::UnsupportedFile(_) => StatusCode::BAD_REQUEST,
        ScanError::AnalysisInFlight => StatusCode::CONFLICT,
    };
    warn!("Scanner request rejected: {}", err);

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// GET /languages
pub async fn list_languages() -> Json<Vec<Language>> {
    Json(Language::ALL.to_vec())
}

/// GET /scanner
pub async fn get_scanner(State(state): State<AppState>) -> impl IntoResponse {
    let scanner = state.scanner.lock().await;
    Json(scanner.snapshot())
}

/// PUT /scanner/language
pub async fn set_language(
    State(state): State<AppState>,
    Json(req): Json<SetLanguageRequest>,
) -> impl IntoResponse {
    let mut scanner = state.scanner.lock().await;
    scanner.select_language(req.language);
    Json(scanner.snapshot())
}

/// POST /scanner/file?name=<file name>
/// Body is the raw audio file
pub async fn upload_file(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Response {
    let file = SelectedFile::from_bytes(params.name, body.to_vec());

    let mut scanner = state.scanner.lock().await;
    match scanner.select_file(file) {
        Ok(()) => (StatusCode::OK, Json(scanner.snapshot())).into_response(),
        Err(e) => scan_error_response(e),
    }
}

/// DELETE /scanner/file
pub async fn remove_file(State(state): State<AppState>) -> impl IntoResponse {
    let mut scanner = state.scanner.lock().await;
    scanner.remove_file();
    Json(scanner.snapshot())
}

/// Leaves `processing` if the analyze request is dropped before its
/// result is applied (client disconnect, timeout).
struct InFlightScan {
    scanner: Arc<Mutex<ViewController>>,
    scan_id: u64,
    armed: bool,
}

impl InFlightScan {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightScan {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let scan_id = self.scan_id;
        if let Ok(mut scanner) = self.scanner.try_lock() {
            scanner.abandon_analysis(scan_id);
            return;
        }

        // Lock is busy; reset once it frees up
        let scanner = Arc::clone(&self.scanner);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    scanner.lock().await.abandon_analysis(scan_id);
                });
            }
            Err(_) => error!("Scan {} abandoned outside a runtime; phase not reset", scan_id),
        }
    }
}

/// POST /scanner/analyze
/// Runs one scan; the lock is released while the request is in flight
pub async fn analyze(State(state): State<AppState>) -> Response {
    let pending = {
        let mut scanner = state.scanner.lock().await;
        match scanner.begin_analysis() {
            Ok(pending) => pending,
            Err(e) => return scan_error_response(e),
        }
    };

    let mut in_flight = InFlightScan {
        scanner: Arc::clone(&state.scanner),
        scan_id: pending.id(),
        armed: true,
    };

    info!("Scan {} started for {}", pending.id(), pending.file_name());
    let response = pending.run().await;

    let mut scanner = state.scanner.lock().await;
    in_flight.disarm();
    let result = scanner.complete_analysis(pending, response).clone();

    (StatusCode::OK, Json(result)).into_response()
}

/// PUT /scanner/view
pub async fn set_view(
    State(state): State<AppState>,
    Json(req): Json<SetViewRequest>,
) -> impl IntoResponse {
    let mut scanner = state.scanner.lock().await;
    scanner.set_display_mode(req.mode);
    Json(scanner.snapshot())
}

/// GET /scanner/render
pub async fn render_view(State(state): State<AppState>) -> String {
    let scanner = state.scanner.lock().await;
    scanner.render()
}

/// GET /archive
pub async fn get_archive(State(state): State<AppState>) -> Json<Vec<HistoryItem>> {
    let scanner = state.scanner.lock().await;
    Json(scanner.history().to_vec())
}

/// DELETE /archive
pub async fn clear_archive(State(state): State<AppState>) -> StatusCode {
    let mut scanner = state.scanner.lock().await;
    scanner.clear_history();
    StatusCode::NO_CONTENT
}
