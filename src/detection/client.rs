use super::error::DetectionError;
use super::types::{DetectionRequest, DetectionResponse};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, warn};

/// Static key the scanner ships with. Not a secret: the service re-checks it.
pub const ACCESS_KEY: &str = "sk_test_123456789";

/// Fixed path of the detection endpoint on the inference host
pub const API_ENDPOINT: &str = "/api/voice-detection";

/// Anything that can turn a request into a normalized response
#[async_trait]
pub trait VoiceDetector: Send + Sync {
    async fn detect(&self, request: DetectionRequest, credential: &str) -> DetectionResponse;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectionEnvelope<'a> {
    request: &'a DetectionRequest,
    api_key: &'a str,
}

/// HTTP client for the remote inference service. One attempt per call.
pub struct DetectionClient {
    client: reqwest::Client,
    url: String,
}

impl DetectionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), API_ENDPOINT),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Same as `detect`, but keeps the failure kind instead of flattening it
    pub async fn try_detect(
        &self,
        request: &DetectionRequest,
        credential: &str,
    ) -> Result<DetectionResponse, DetectionError> {
        if credential != ACCESS_KEY {
            return Err(DetectionError::AccessDenied);
        }

        info!(
            "Submitting {} sample ({} base64 chars) to {}",
            request.language,
            request.audio_base64.len(),
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .json(&DetectionEnvelope {
                request,
                api_key: credential,
            })
            .send()
            .await
            .map_err(|e| DetectionError::Transport(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| DetectionError::Transport(format!("body: {}", e)))?;
            warn!("Detection service returned {}", status);
            return Err(DetectionError::Service(body));
        }

        let parsed = response
            .json::<DetectionResponse>()
            .await
            .map_err(|e| DetectionError::Transport(format!("decode: {}", e)))?;

        info!("Detection completed (success={})", parsed.is_success());

        Ok(parsed)
    }
}

#[async_trait]
impl VoiceDetector for DetectionClient {
    async fn detect(&self, request: DetectionRequest, credential: &str) -> DetectionResponse {
        match self.try_detect(&request, credential).await {
            Ok(response) => response,
            Err(e) => {
                match &e {
                    DetectionError::AccessDenied => warn!("Rejected detection: invalid credential"),
                    DetectionError::Transport(detail) => error!("Client fetch error: {}", detail),
                    DetectionError::Service(_) => {}
                }
                e.into()
            }
        }
    }
}
