use super::types::DetectionResponse;

pub const ACCESS_DENIED_MESSAGE: &str = "Access Denied: Please verify your security key.";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "We encountered a hiccup while analyzing the audio. Please try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("credential rejected")]
    AccessDenied,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("service error: {0}")]
    Service(String),
}

impl From<DetectionError> for DetectionResponse {
    fn from(err: DetectionError) -> Self {
        match err {
            DetectionError::AccessDenied => DetectionResponse::error(ACCESS_DENIED_MESSAGE),
            // Detail stays in the logs
            DetectionError::Transport(_) => DetectionResponse::error(TRANSPORT_FAILURE_MESSAGE),
            DetectionError::Service(message) if message.is_empty() => {
                DetectionResponse::error(SERVER_ERROR_MESSAGE)
            }
            DetectionError::Service(message) => DetectionResponse::error(message),
        }
    }
}
