//! Local HTTP API over the scanner
//!
//! - GET /health - Health check
//! - GET /languages - Supported languages
//! - GET /scanner - Current scanner state
//! - PUT /scanner/language - Select language
//! - POST /scanner/file?name=... - Select a file (raw body)
//! - DELETE /scanner/file - Remove the selected file
//! - POST /scanner/analyze - Run one scan
//! - PUT /scanner/view - Switch between scanner and archive
//! - GET /scanner/render - Text rendering of the active view
//! - GET /archive, DELETE /archive - List or flush history

mod handlers;
mod routes;
mod state;

pub use handlers::{ErrorResponse, SetLanguageRequest, SetViewRequest, UploadParams};
pub use routes::create_router;
pub use state::AppState;
