use std::time::Duration;

use thiserror::Error;

/// Per-request limits for the HTTP client.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
        }
    }
}

/// Status and raw body length of one completed probe.
///
/// Any status code is a completed probe here; deciding whether it is
/// interesting belongs to the match set, not the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub content_length: u64,
}

/// A probe that never produced a status code.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not build http client: {0}")]
    Client(String),
}

/// One blocking GET against a fully built target URL.
pub trait ProbeTransport: Send + Sync {
    fn probe(&self, url: &str) -> Result<ProbeResponse, ProbeError>;
}

/// Transport backed by a connection-pooled blocking reqwest client.
///
/// Each worker builds its own instance, so pooled connections are reused
/// across that worker's probes.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(settings: &ProbeSettings) -> Result<Self, ProbeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.timeout)
            .build()
            .map_err(|err| ProbeError::Client(err.to_string()))?;
        Ok(Self { client })
    }
}

impl ProbeTransport for ReqwestTransport {
    fn probe(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let response = self.client.get(url).send().map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(map_reqwest_error)?;
        Ok(ProbeResponse {
            status,
            content_length: body.len() as u64,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::Timeout;
    }
    if err.is_connect() {
        return ProbeError::Connect(err.to_string());
    }
    ProbeError::Network(err.to_string())
}
