use crate::detection::{Language, ACCESS_KEY};
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub detection: DetectionConfig,
    pub scanner: ScannerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Host of the inference service; the endpoint path is fixed
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScannerConfig {
    pub default_language: Language,
    /// Unbounded when absent
    pub history_limit: Option<usize>,
}

impl Config {
    /// Load from `path` (any extension `config` understands). A missing file
    /// falls back to the built-in defaults.
    pub fn load(path: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("service.name", "VeriVoice AI")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8080_i64)?
            .set_default("detection.base_url", "http://127.0.0.1:3000")?
            .set_default("detection.api_key", ACCESS_KEY)?
            .set_default("scanner.default_language", Language::default().as_str())?)
    }
}
