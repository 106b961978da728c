use super::file::{FileSource, SelectedFile};
use crate::detection::AudioFormat;
use base64::Engine;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build a `data:` URL for the given bytes
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Everything after the first comma of a data URL
pub fn data_url_payload(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, payload)| payload)
}

/// Reads a selected file and produces the base64 payload sent to the service
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioEncoder {
    format: AudioFormat,
}

impl AudioEncoder {
    pub fn new(format: AudioFormat) -> Self {
        Self { format }
    }

    pub async fn encode(&self, file: &SelectedFile) -> Result<String, EncodeError> {
        let data_url = match &file.source {
            FileSource::Path(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| {
                    warn!("Failed to read {}: {}", path.display(), source);
                    EncodeError::Read {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                to_data_url(self.format.mime_type(), &bytes)
            }
            FileSource::Bytes(bytes) => to_data_url(self.format.mime_type(), bytes),
        };

        // A well-formed data URL always has the separator
        let payload = data_url_payload(&data_url).unwrap_or_default().to_string();

        info!("Encoded {} ({} base64 chars)", file.location(), payload.len());

        Ok(payload)
    }
}
