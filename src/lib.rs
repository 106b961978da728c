pub mod audio;
pub mod config;
pub mod detection;
pub mod history;
pub mod http;
pub mod scanner;

pub use audio::{AudioEncoder, EncodeError, SelectedFile};
pub use config::Config;
pub use detection::{
    Classification, DetectionClient, DetectionRequest, DetectionResponse, Language, Verdict,
    VoiceDetector,
};
pub use history::{HistoryItem, HistoryStore};
pub use http::{create_router, AppState};
pub use scanner::{DisplayMode, ScanError, ScanPhase, ViewController};
