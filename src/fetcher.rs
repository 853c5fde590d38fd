use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::Config;
use crate::constants::GEO_JSON;
use crate::error::FetchError;

/// HTTP access to the NWS API.
///
/// Every request carries the configured user agent and
/// `Accept: application/geo+json`. One attempt per call, no timeout.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Arc<Client>,
    api_base: String,
}

impl NwsClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_base: config.api_base.clone(),
        })
    }

    /// Joins a path onto the configured base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Makes a GET request and decodes the JSON body, keeping the failure cause
    pub async fn try_fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "Making NWS request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Makes a GET request and decodes the JSON body.
    ///
    /// Returns `None` on any failure after logging the cause.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.try_fetch_json(url).await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::error!(url, error = %e, "Error making NWS request");
                None
            }
        }
    }
}
