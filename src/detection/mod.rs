//! Detection client for the remote voice-classification service
//!
//! - `types`: wire types (request, tagged response, language set)
//! - `client`: credential gate plus a single POST per call
//! - `error`: failure taxonomy and the user-facing messages it maps to

mod client;
mod error;
mod types;

pub use client::{DetectionClient, VoiceDetector, ACCESS_KEY, API_ENDPOINT};
pub use error::{
    DetectionError, ACCESS_DENIED_MESSAGE, SERVER_ERROR_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
pub use types::{
    AudioFormat, Classification, DetectionRequest, DetectionResponse, Language, Verdict,
};
