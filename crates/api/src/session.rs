//! HTTP session shared by every check in a run

use std::time::{Duration, Instant};

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::endpoints::{EndpointRegistry, Operation};
use crate::error::{Error, Result};

/// A response whose body has already been read
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub operation: Operation,
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| Error::malformed(self.operation, e.to_string()))
    }
}

/// Connection- and cookie-carrying client plus the endpoint registry
#[derive(Debug, Clone)]
pub struct ApiSession {
    client: Client,
    endpoints: EndpointRegistry,
}

impl ApiSession {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs));

        for (host, addr) in &config.resolve {
            debug!("Resolving {} to {}", host, addr);
            builder = builder.resolve(host, *addr);
        }

        Ok(Self {
            client: builder.build()?,
            endpoints: EndpointRegistry::new(config),
        })
    }

    pub fn endpoints(&self) -> &EndpointRegistry {
        &self.endpoints
    }

    pub(crate) fn endpoints_mut(&mut self) -> &mut EndpointRegistry {
        &mut self.endpoints
    }

    pub async fn get(&self, operation: Operation, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let url = self.endpoints.url(operation)?;
        self.send(operation, self.client.get(&url).query(query)).await
    }

    pub async fn post(&self, operation: Operation, query: &[(&str, &str)]) -> Result<ApiResponse> {
        let url = self.endpoints.url(operation)?;
        self.send(operation, self.client.post(&url).query(query)).await
    }

    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse> {
        let start = Instant::now();
        // Login credentials travel in the query string, keep URLs out of errors
        let response: Response = request
            .send()
            .await
            .map_err(|e| Error::Transport {
                operation,
                source: e.without_url(),
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport {
                operation,
                source: e.without_url(),
            })?;

        debug!(
            "{} -> {} ({} ms)",
            operation,
            status,
            start.elapsed().as_millis()
        );

        Ok(ApiResponse {
            operation,
            status,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_is_malformed_response() {
        let resp = ApiResponse {
            operation: Operation::Authorize,
            status: StatusCode::OK,
            body: "<html>".to_string(),
        };
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedResponse {
                operation: Operation::Authorize,
                ..
            }
        ));
    }

    #[test]
    fn test_session_starts_unauthorized() {
        let session = ApiSession::new(&ApiConfig::default()).unwrap();
        assert!(session.endpoints().subdomain().is_none());
    }
}
