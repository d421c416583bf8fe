//! Blocking HTTP transport.

use eqs_model::EquipmentRecord;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::command::{StoreCommand, StoreResponse};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::transport::StoreTransport;

/// User agent string for store requests.
const USER_AGENT_VALUE: &str = concat!("eqs/", env!("CARGO_PKG_VERSION"));

/// Store reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    endpoint: String,
}

impl HttpStore {
    /// Builds a client for the configured endpoint.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        if !config.has_endpoint() {
            return Err(StoreError::MissingEndpoint);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Checks the status line and decodes the JSON body.
    fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(StoreError::Http {
                status: status.as_u16(),
                body: truncate(&body),
            });
        }
        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Err(StoreError::Decode("empty response body".to_string()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl StoreTransport for HttpStore {
    fn fetch_all(&self) -> Result<Vec<EquipmentRecord>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching dataset");

        let response = self.client.get(&self.endpoint).send()?;
        let records: Vec<EquipmentRecord> = Self::handle_response(response)?;

        tracing::debug!(rows = records.len(), "fetched dataset");
        Ok(records)
    }

    fn send(&self, command: &StoreCommand) -> Result<StoreResponse> {
        tracing::debug!(
            endpoint = %self.endpoint,
            command = command.kind(),
            rows = command.row_count(),
            "sending store command"
        );

        let response = self.client.post(&self.endpoint).json(command).send()?;
        Self::handle_response(response)
    }
}

/// Error bodies can be whole HTML pages; keep the start only.
fn truncate(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let mut text: String = body.trim().chars().take(MAX_CHARS).collect();
    if body.trim().chars().count() > MAX_CHARS {
        text.push('…');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint() {
        let result = HttpStore::new(&StoreConfig::default());
        assert!(matches!(result, Err(StoreError::MissingEndpoint)));
    }

    #[test]
    fn test_client_creation() {
        let store = HttpStore::new(&StoreConfig::new(" https://example.invalid/exec ")).unwrap();
        assert_eq!(store.endpoint(), "https://example.invalid/exec");
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(500);
        let text = truncate(&body);
        assert_eq!(text.chars().count(), 201);
        assert!(text.ends_with('…'));
        assert_eq!(truncate(" short "), "short");
    }
}
