use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use telly_core::config::FeedConfig;

use crate::detail;
use crate::error::{FeedError, Result};
use crate::rss;
use crate::source::{DetailSource, SnapshotSource};
use crate::types::FeedItem;

/// HTTP access to the upstream service: personal RSS snapshot plus per-show
/// detail pages, over one shared client.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    base_url: String,
    account: String,
    token: String,
}

impl HttpFeed {
    pub fn new(config: &FeedConfig, account: String, token: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FeedError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            account,
            token,
        })
    }

    // Never logged: the token is a path segment.
    fn snapshot_url(&self) -> String {
        format!("{}/export/rss/{}/{}", self.base_url, self.account, self.token)
    }

    fn detail_url(&self, id: &str) -> String {
        format!("{}/detail/{}", self.base_url, id)
    }
}

#[async_trait]
impl SnapshotSource for HttpFeed {
    async fn fetch(&self) -> Result<Vec<FeedItem>> {
        debug!(account = %self.account, "fetching feed snapshot");
        let resp = self.client.get(self.snapshot_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Unavailable(format!("feed returned HTTP {status}")));
        }
        let body = resp.text().await?;
        rss::parse_snapshot(&body)
    }
}

#[async_trait]
impl DetailSource for HttpFeed {
    async fn channel_for(&self, id: &str) -> Result<Option<String>> {
        let url = self.detail_url(id);
        debug!(%url, "fetching show detail");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::DetailUnavailable {
                id: id.to_string(),
                reason: e.without_url().to_string(),
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::DetailUnavailable {
                id: id.to_string(),
                reason: format!("HTTP {status}"),
            });
        }
        let html = resp.text().await.map_err(|e| FeedError::DetailUnavailable {
            id: id.to_string(),
            reason: e.without_url().to_string(),
        })?;
        Ok(detail::extract_channel(&html))
    }
}
