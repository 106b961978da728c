use crate::detection::{DetectionResponse, Language};
use serde::{Deserialize, Serialize};

/// Where the scanner is in its select → analyze → show cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanPhase {
    #[default]
    Idle,
    FileSelected,
    Processing,
    ResultReady,
}

/// Which view is rendered; independent of the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Scanner,
    Archive,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("no audio file selected")]
    NoFileSelected,
    #[error("an analysis is already in progress")]
    AnalysisInFlight,
    #[error("unsupported file type: {0} (expected .mp3)")]
    UnsupportedFile(String),
}

/// Serializable view of the controller, used by the HTTP API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerSnapshot {
    pub phase: ScanPhase,
    pub display_mode: DisplayMode,
    pub language: Language,
    pub file_name: Option<String>,
    pub result: Option<DetectionResponse>,
    /// Confidence of a successful result, two decimals
    pub confidence: Option<String>,
    pub history_count: usize,
}
