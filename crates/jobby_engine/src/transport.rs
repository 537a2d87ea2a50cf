use std::time::Duration;

use futures_util::StreamExt;
use jobby_logging::jobby_debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{ApiRequest, FailureKind, Method, TransportError, TransportResponse};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Performs one HTTP exchange. Implementations never retry.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    settings: TransportSettings,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn check_len(&self, len: u64) -> Result<(), TransportError> {
        if len > self.settings.max_bytes {
            return Err(TransportError::new(
                FailureKind::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(len),
                },
                "response too large",
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
        };

        let response = self
            .client
            .request(method, url)
            .headers(header_map(&request.headers)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        jobby_debug!(
            "{} {} -> {}",
            request.method.as_str(),
            request.url,
            status.as_u16()
        );

        if let Some(content_len) = response.content_length() {
            self.check_len(content_len)?;
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            self.check_len(body.len() as u64 + chunk.len() as u64)?;
            body.extend_from_slice(&chunk);
        }

        Ok(TransportResponse {
            ok: status.is_success(),
            body,
        })
    }
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| TransportError::new(FailureKind::InvalidHeader, err.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| TransportError::new(FailureKind::InvalidHeader, err.to_string()))?;
        map.append(name, value);
    }
    Ok(map)
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
