use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use tracing::debug;

use crate::config::AppConfig;
use crate::usecase::ports::source::SourceError;

/// Raw HTTP answer; interpretation is left to the envelope decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking client for the back-office REST API.
///
/// Must not be driven from inside an async runtime; the UI goes through
/// `platform::desktop::blocking::run_blocking`.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(config.api_base_url.trim()).map_err(|err| {
            SourceError::Network(format!("invalid API URL {}: {err}", config.api_base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::Network(format!(
                "invalid API URL {}",
                config.api_base_url
            )));
        }
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| SourceError::Network(err.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn get(&self, segments: &[&str], query: &[(String, String)]) -> Result<ApiResponse, SourceError> {
        let url = self.url(segments);
        self.send("GET", &url, self.client.get(url.clone()).query(query))
    }

    pub fn delete(&self, segments: &[&str]) -> Result<ApiResponse, SourceError> {
        let url = self.url(segments);
        self.send("DELETE", &url, self.client.delete(url.clone()))
    }

    pub fn patch_json(
        &self,
        segments: &[&str],
        body: &serde_json::Value,
    ) -> Result<ApiResponse, SourceError> {
        let url = self.url(segments);
        self.send("PATCH", &url, self.client.patch(url.clone()).json(body))
    }

    fn send(
        &self,
        method: &str,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<ApiResponse, SourceError> {
        let response = request
            .header(
                USER_AGENT,
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|err| SourceError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| SourceError::Network(err.to_string()))?;
        debug!(method, %url, status, bytes = body.len(), "api call");

        Ok(ApiResponse { status, body })
    }
}
