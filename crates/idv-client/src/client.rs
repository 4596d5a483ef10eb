//! Core HTTP client for the identity service.
//!
//! Wraps a single `reqwest::Client` configured with the bearer token
//! and per-request timeout. Endpoint groups hang off this type as
//! facades: [`IdvClient::onboarding`] and [`IdvClient::faces`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::IdvApiConfig;
use crate::error::IdvApiError;
use crate::faces::FaceOperationsClient;
use crate::onboarding::OnboardingClient;

/// Authenticated client for the identity service.
#[derive(Debug, Clone)]
pub struct IdvClient {
    client: reqwest::Client,
    base_url: String,
}

impl IdvClient {
    /// Build a client from configuration.
    ///
    /// Installs the bearer token and JSON content type as default
    /// headers and trims a trailing slash off the base URL so endpoint
    /// paths can be joined with plain formatting.
    pub fn new(config: IdvApiConfig) -> Result<Self, IdvApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!(
                        "Bearer {}",
                        config.api_token.as_str()
                    ))
                    .map_err(|_| IdvApiError::Config(crate::config::ConfigError::InvalidToken))?,
                );
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|source| IdvApiError::Http {
                endpoint: "client construction".into(),
                source,
            })?;

        let base_url = config.base_url.as_str().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Customer onboarding endpoints.
    pub fn onboarding(&self) -> OnboardingClient<'_> {
        OnboardingClient::new(self)
    }

    /// Standalone face operation endpoints.
    pub fn faces(&self) -> FaceOperationsClient<'_> {
        FaceOperationsClient::new(self)
    }

    /// Absolute URL for an endpoint path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and map transport failures and non-2xx statuses.
    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, IdvApiError> {
        tracing::debug!(endpoint, "sending identity service request");
        let resp = request.send().await.map_err(|source| IdvApiError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IdvApiError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    /// GET `path` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        endpoint: &str,
    ) -> Result<T, IdvApiError> {
        let resp = self.send(self.client.get(self.url(path)), endpoint).await?;
        decode(resp, endpoint).await
    }

    /// POST `body` to `path` and decode the JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        endpoint: &str,
    ) -> Result<T, IdvApiError> {
        let resp = self
            .send(self.client.post(self.url(path)).json(body), endpoint)
            .await?;
        decode(resp, endpoint).await
    }

    /// POST to `path` with no request body, decoding the JSON response.
    pub(crate) async fn post_empty_json<T: DeserializeOwned>(
        &self,
        path: &str,
        endpoint: &str,
    ) -> Result<T, IdvApiError> {
        let resp = self.send(self.client.post(self.url(path)), endpoint).await?;
        decode(resp, endpoint).await
    }

    /// PUT `body` to `path` and decode the JSON response.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        endpoint: &str,
    ) -> Result<T, IdvApiError> {
        let resp = self
            .send(self.client.put(self.url(path)).json(body), endpoint)
            .await?;
        decode(resp, endpoint).await
    }

    /// PUT `body` to `path`, ignoring any response body.
    pub(crate) async fn put_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        endpoint: &str,
    ) -> Result<(), IdvApiError> {
        self.send(self.client.put(self.url(path)).json(body), endpoint)
            .await?;
        Ok(())
    }

    /// PUT to `path` with no request body, ignoring any response body.
    pub(crate) async fn put_empty(&self, path: &str, endpoint: &str) -> Result<(), IdvApiError> {
        self.send(self.client.put(self.url(path)), endpoint).await?;
        Ok(())
    }

    /// DELETE `path`, ignoring any response body.
    pub(crate) async fn delete(&self, path: &str, endpoint: &str) -> Result<(), IdvApiError> {
        self.send(self.client.delete(self.url(path)), endpoint)
            .await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, IdvApiError> {
    resp.json()
        .await
        .map_err(|source| IdvApiError::Deserialization {
            endpoint: endpoint.to_string(),
            source,
        })
}
