use crate::scanner::ViewController;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The one scanner this server drives
    pub scanner: Arc<Mutex<ViewController>>,
}

impl AppState {
    pub fn new(controller: ViewController) -> Self {
        Self {
            scanner: Arc::new(Mutex::new(controller)),
        }
    }
}
