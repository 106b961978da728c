use std::path::{Path, PathBuf};
use tracing::info;

/// Where the bytes of a selected file live
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Read lazily at encode time
    Path(PathBuf),
    /// Already in memory (e.g. an HTTP upload)
    Bytes(Vec<u8>),
}

/// An audio file picked by the user, not yet read or validated
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        info!("Selected audio file: {}", path.display());

        Self {
            name,
            source: FileSource::Path(path.to_path_buf()),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        info!("Selected uploaded audio: {} ({} bytes)", name, bytes.len());

        Self {
            name,
            source: FileSource::Bytes(bytes),
        }
    }

    /// Human-readable location, for logs and errors
    pub fn location(&self) -> String {
        match &self.source {
            FileSource::Path(path) => path.display().to_string(),
            FileSource::Bytes(_) => format!("upload:{}", self.name),
        }
    }
}
