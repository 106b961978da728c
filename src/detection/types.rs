use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spoken languages the inference service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    Tamil,
    #[default]
    English,
    Hindi,
    Malayalam,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Tamil,
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "Tamil",
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Telugu => "Telugu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported language: {}", s))
    }
}

/// Audio container accepted by the service (only MP3 today)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
        }
    }

    /// Extension filter applied at file selection; contents are never inspected
    pub fn accepts(&self, file_name: &str) -> bool {
        std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    AiGenerated,
    Human,
}

impl Classification {
    /// Label shown on the result panel
    pub fn label(&self) -> &'static str {
        match self {
            Classification::AiGenerated => "AI GENERATED",
            Classification::Human => "HUMAN",
        }
    }

    /// Short badge shown in the archive
    pub fn badge(&self) -> &'static str {
        match self {
            Classification::AiGenerated => "AI",
            Classification::Human => "Human",
        }
    }
}

/// Body of a single detection submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRequest {
    pub language: Language,
    pub audio_format: AudioFormat,
    pub audio_base64: String,
}

impl DetectionRequest {
    pub fn new(language: Language, audio_base64: String) -> Self {
        Self {
            language,
            audio_format: AudioFormat::Mp3,
            audio_base64,
        }
    }
}

/// Successful classification returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub language: Language,
    pub classification: Classification,
    /// Expected in [0, 1]; not clamped
    pub confidence_score: f64,
    #[serde(default)]
    pub explanation: String,
}

/// Normalized outcome of a detection call, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DetectionResponse {
    Success(Verdict),
    Error { message: String },
}

impl DetectionResponse {
    pub fn error(message: impl Into<String>) -> Self {
        DetectionResponse::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DetectionResponse::Success(_))
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            DetectionResponse::Success(verdict) => Some(verdict),
            DetectionResponse::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            DetectionResponse::Success(_) => None,
            DetectionResponse::Error { message } => Some(message),
        }
    }
}
