use super::controller::ViewController;
use super::state::ScanPhase;
use crate::detection::DetectionResponse;
use crate::history::HistoryStore;
use chrono::Local;
use std::fmt;

pub const APP_NAME: &str = "VeriVoice AI";

/// Confidence as shown everywhere: two decimal places, no clamping
pub fn format_confidence(score: f64) -> String {
    format!("{:.2}", score)
}

/// Text form of the scanner view
pub struct ScannerView<'a>(pub &'a ViewController);

impl fmt::Display for ScannerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let controller = self.0;

        writeln!(f, "{} | Scanner", APP_NAME)?;
        writeln!(f, "Language: {}", controller.language())?;
        match controller.file() {
            Some(file) => writeln!(f, "File: {} (ready for analysis)", file.name)?,
            None => writeln!(f, "File: none selected")?,
        }
        if controller.phase() == ScanPhase::Processing {
            writeln!(f, "Verifying sample...")?;
        }
        writeln!(f)?;

        match controller.result() {
            Some(DetectionResponse::Success(verdict)) => {
                writeln!(f, "Verification result: {}", verdict.classification.label())?;
                writeln!(
                    f,
                    "Analysis confidence: {}",
                    format_confidence(verdict.confidence_score)
                )?;
                writeln!(f, "The verdict: {}", verdict.explanation)
            }
            Some(DetectionResponse::Error { message }) => {
                writeln!(f, "Oops! Something went wrong")?;
                writeln!(f, "{}", message)
            }
            None => {
                writeln!(f, "Standby mode")?;
                writeln!(
                    f,
                    "Upload a sample and run analyze to begin the verification process."
                )
            }
        }
    }
}

/// Text form of the archive view
pub struct ArchiveView<'a>(pub &'a HistoryStore);

impl fmt::Display for ArchiveView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let history = self.0;

        writeln!(f, "{} | Scan Archive", APP_NAME)?;
        if history.is_empty() {
            return writeln!(f, "No records found");
        }

        for item in history.list() {
            writeln!(
                f,
                "{}  {:<24}  {:<10}  {:<5}  {}",
                item.timestamp.with_timezone(&Local).format("%H:%M:%S"),
                item.file_name,
                item.verdict.language,
                item.verdict.classification.badge(),
                format_confidence(item.verdict.confidence_score)
            )?;
        }
        Ok(())
    }
}

pub fn render_scanner(controller: &ViewController) -> String {
    ScannerView(controller).to_string()
}

pub fn render_archive(history: &HistoryStore) -> String {
    ArchiveView(history).to_string()
}
