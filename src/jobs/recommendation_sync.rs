// src/jobs/recommendation_sync.rs
use tracing::info;

use crate::core::service_client::{JOBS_ENDPOINT, RECOMMENDATION_UPDATE_ENDPOINT, USERS_ENDPOINT};
use crate::core::{ApiConfig, ServiceClient};
use crate::error::{JobError, Result};
use crate::types::{DataPage, JobRecord, RecommendationPayload, UserRecord};

pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Counts from a completed sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub users_fetched: usize,
    pub jobs_fetched: usize,
    pub updates_sent: usize,
}

/// Load settings through `lookup`, then run the sync. Configuration is
/// validated before the client is built, so a missing key never reaches the network.
pub async fn execute<F>(lookup: F, limit: u32) -> Result<SyncReport>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ApiConfig::for_sync(lookup)?;
    info!("Recommendation sync against {}", config.base_url);

    let client = ServiceClient::new(&config)?;
    run(&client, limit).await
}

/// Fetch users and jobs, then push one placeholder payload per user.
///
/// Updates are sent in order and the first failure stops the run. Updates
/// already accepted by the server stay applied. A user row without `user_id`
/// fails the run at that row.
pub async fn run(client: &ServiceClient, limit: u32) -> Result<SyncReport> {
    info!("📥 Fetching users...");
    let users: DataPage<UserRecord> = client.get_page(USERS_ENDPOINT, limit).await?;
    info!("Fetched {} users", users.len());
    if users.has_more() {
        info!("More users are available past this page; only {} are processed", users.len());
    }

    info!("📥 Fetching jobs...");
    let jobs: DataPage<JobRecord> = client.get_page(JOBS_ENDPOINT, limit).await?;
    info!("Fetched {} jobs", jobs.len());

    let mut report = SyncReport {
        users_fetched: users.len(),
        jobs_fetched: jobs.len(),
        updates_sent: 0,
    };

    for (index, user) in users.data.iter().enumerate() {
        let user_id = user
            .user_id
            .as_deref()
            .ok_or_else(|| JobError::MalformedRecord {
                url: format!("{}{}", client.base_url(), USERS_ENDPOINT),
                index,
                field: "user_id",
            })?;
        let payload = RecommendationPayload::placeholder(user_id);

        info!("Updating recommendation for user {}", user_id);
        client
            .post_json(RECOMMENDATION_UPDATE_ENDPOINT, &payload)
            .await?;
        report.updates_sent += 1;
    }

    info!(
        "✨ Recommendation sync completed: {} updates sent",
        report.updates_sent
    );
    Ok(report)
}
