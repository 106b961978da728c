use super::render;
use super::state::{DisplayMode, ScanError, ScanPhase, ScannerSnapshot};
use crate::audio::{AudioEncoder, SelectedFile};
use crate::detection::{AudioFormat, DetectionRequest, DetectionResponse, Language, VoiceDetector};
use crate::history::HistoryStore;
use std::sync::Arc;
use tracing::{info, warn};

pub const READ_FAILURE_MESSAGE: &str = "Could not read the selected audio file. Please try again.";

/// A scan that has left the controller and is waiting on encode + detect.
///
/// Carries everything it needs so the caller can run it without holding
/// the controller.
pub struct PendingScan {
    id: u64,
    file: SelectedFile,
    language: Language,
    encoder: AudioEncoder,
    detector: Arc<dyn VoiceDetector>,
    credential: String,
}

impl PendingScan {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file_name(&self) -> &str {
        &self.file.name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Encode the file, then submit it. Read failures never reach the network.
    pub async fn run(&self) -> DetectionResponse {
        let audio_base64 = match self.encoder.encode(&self.file).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Audio encoding failed: {}", e);
                return DetectionResponse::error(READ_FAILURE_MESSAGE);
            }
        };

        let request = DetectionRequest::new(self.language, audio_base64);
        self.detector.detect(request, &self.credential).await
    }
}

/// Single owner of the scanner's state. All mutation goes through its methods.
pub struct ViewController {
    detector: Arc<dyn VoiceDetector>,
    encoder: AudioEncoder,
    credential: String,
    format: AudioFormat,
    language: Language,
    file: Option<SelectedFile>,
    phase: ScanPhase,
    result: Option<DetectionResponse>,
    history: HistoryStore,
    display_mode: DisplayMode,
    /// Id handed to the most recent `PendingScan`
    scan_seq: u64,
}

impl ViewController {
    pub fn new(detector: Arc<dyn VoiceDetector>, credential: impl Into<String>) -> Self {
        Self {
            detector,
            encoder: AudioEncoder::new(AudioFormat::Mp3),
            credential: credential.into(),
            format: AudioFormat::Mp3,
            language: Language::default(),
            file: None,
            phase: ScanPhase::Idle,
            result: None,
            history: HistoryStore::new(),
            display_mode: DisplayMode::Scanner,
            scan_seq: 0,
        }
    }

    pub fn with_history(mut self, history: HistoryStore) -> Self {
        self.history = history;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&DetectionResponse> {
        self.result.as_ref()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn is_processing(&self) -> bool {
        self.phase == ScanPhase::Processing
    }

    pub fn select_language(&mut self, language: Language) {
        info!("Language set to {}", language);
        self.language = language;
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), ScanError> {
        if !self.format.accepts(&file.name) {
            warn!("Rejected file {}: not .{}", file.name, self.format.extension());
            return Err(ScanError::UnsupportedFile(file.name));
        }

        self.file = Some(file);
        // An in-flight scan keeps the file it started with
        if self.phase != ScanPhase::Processing {
            self.phase = ScanPhase::FileSelected;
        }
        Ok(())
    }

    /// Drop the selected file. The last result stays until the next analysis.
    pub fn remove_file(&mut self) {
        self.file = None;
        if self.phase != ScanPhase::Processing {
            self.phase = ScanPhase::Idle;
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Enter `processing` and hand back the work to perform
    pub fn begin_analysis(&mut self) -> Result<PendingScan, ScanError> {
        if self.phase == ScanPhase::Processing {
            return Err(ScanError::AnalysisInFlight);
        }
        let file = self.file.clone().ok_or(ScanError::NoFileSelected)?;

        info!("Analyzing {} as {}", file.name, self.language);

        self.result = None;
        self.phase = ScanPhase::Processing;
        self.scan_seq += 1;

        Ok(PendingScan {
            id: self.scan_seq,
            file,
            language: self.language,
            encoder: self.encoder,
            detector: Arc::clone(&self.detector),
            credential: self.credential.clone(),
        })
    }

    /// Apply the outcome of a scan; successes are also archived
    pub fn complete_analysis(
        &mut self,
        pending: PendingScan,
        response: DetectionResponse,
    ) -> &DetectionResponse {
        if let Some(verdict) = response.verdict() {
            self.history.record(verdict.clone(), pending.file.name);
        } else if let Some(message) = response.message() {
            info!("Analysis of {} failed: {}", pending.file.name, message);
        }

        self.phase = ScanPhase::ResultReady;
        self.result.insert(response)
    }

    /// Leave `processing` for a scan whose outcome will never arrive.
    ///
    /// Only the scan currently in flight can be abandoned; stale ids are
    /// ignored. Returns whether the phase changed.
    pub fn abandon_analysis(&mut self, scan_id: u64) -> bool {
        if self.phase != ScanPhase::Processing || self.scan_seq != scan_id {
            return false;
        }

        warn!("Abandoned scan {} before it completed", scan_id);
        self.phase = if self.file.is_some() {
            ScanPhase::FileSelected
        } else {
            ScanPhase::Idle
        };
        true
    }

    /// Run a full cycle: begin, encode + detect, complete
    pub async fn analyze(&mut self) -> Result<&DetectionResponse, ScanError> {
        let pending = self.begin_analysis()?;
        let response = pending.run().await;
        Ok(self.complete_analysis(pending, response))
    }

    pub fn snapshot(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            phase: self.phase,
            display_mode: self.display_mode,
            language: self.language,
            file_name: self.file.as_ref().map(|f| f.name.clone()),
            result: self.result.clone(),
            confidence: self
                .result
                .as_ref()
                .and_then(|r| r.verdict())
                .map(|v| render::format_confidence(v.confidence_score)),
            history_count: self.history.len(),
        }
    }

    /// Text rendering of whichever view is active
    pub fn render(&self) -> String {
        match self.display_mode {
            DisplayMode::Scanner => render::render_scanner(self),
            DisplayMode::Archive => render::render_archive(&self.history),
        }
    }
}
