// src/core/service_client.rs
//! HTTP client for the recommendations API. Every request is authenticated
//! with the `X-API-KEY` header and sent as JSON.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

use crate::core::config_manager::ApiConfig;
use crate::error::{JobError, Result};
use crate::types::DataPage;

pub const API_KEY_HEADER: &str = "x-api-key";

pub const USERS_ENDPOINT: &str = "/ai/data/users";
pub const JOBS_ENDPOINT: &str = "/ai/data/jobs";
pub const RECOMMENDATION_UPDATE_ENDPOINT: &str = "/ai/recommendations/update";
pub const REFRESH_SIGNALS_ENDPOINT: &str = "/ai/refresh-signals";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client carrying the configured key on every request
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| JobError::invalid_config("api key", e.to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(JobError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET one page of records. Any non-2xx status is an error.
    pub async fn get_page<T>(&self, endpoint: &str, limit: u32) -> Result<DataPage<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        trace!("GET {} (limit={})", url, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|source| JobError::Transport {
                url: url.clone(),
                source,
            })?;

        let response = ensure_success(&url, response).await?;
        response
            .json::<DataPage<T>>()
            .await
            .map_err(|source| JobError::Decode { url, source })
    }

    /// POST a JSON body. Any 2xx status is success; the response body is discarded.
    pub async fn post_json<T>(&self, endpoint: &str, payload: &T) -> Result<StatusCode>
    where
        T: Serialize,
    {
        let url = self.url(endpoint);
        trace!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|source| JobError::Transport {
                url: url.clone(),
                source,
            })?;

        let response = ensure_success(&url, response).await?;
        Ok(response.status())
    }

    /// POST without a body and hand back the raw status and body text.
    /// Status policy is left to the caller.
    pub async fn post_empty(&self, endpoint: &str) -> Result<(StatusCode, String)> {
        let url = self.url(endpoint);
        trace!("POST {} (no body)", url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|source| JobError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| JobError::Decode { url, source })?;

        Ok((status, body))
    }
}

async fn ensure_success(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    trace!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    debug!("{} returned {}: {}", url, status, body);

    Err(JobError::Status {
        url: url.to_string(),
        status,
        body,
    })
}
