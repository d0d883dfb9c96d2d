// src/jobs/signal_refresh.rs
use reqwest::StatusCode;
use tracing::{error, info};

use crate::core::service_client::REFRESH_SIGNALS_ENDPOINT;
use crate::core::{ApiConfig, ServiceClient};
use crate::error::{JobError, Result};

/// Accepted response from the refresh endpoint
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub status: StatusCode,
    pub body: String,
}

pub async fn execute<F>(lookup: F) -> Result<RefreshOutcome>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ApiConfig::for_refresh(lookup)?;
    let client = ServiceClient::new(&config)?;
    trigger(&client).await
}

/// Ask the server to start a refresh cycle.
///
/// Only `202 Accepted` counts as success. The cycle itself runs server-side
/// and is not awaited.
pub async fn trigger(client: &ServiceClient) -> Result<RefreshOutcome> {
    let url = format!("{}{}", client.base_url(), REFRESH_SIGNALS_ENDPOINT);
    info!("Triggering global signal refresh at {}...", url);

    let (status, body) = client.post_empty(REFRESH_SIGNALS_ENDPOINT).await?;

    if status != StatusCode::ACCEPTED {
        error!("Failed to trigger refresh. Status: {}", status.as_u16());
        error!("Error details: {}", body);
        return Err(JobError::Status { url, status, body });
    }

    info!("Successfully initiated refresh cycle");
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => info!("Response: {}", json),
        Err(_) if body.is_empty() => {}
        Err(_) => info!("Response: {}", body),
    }

    Ok(RefreshOutcome { status, body })
}
