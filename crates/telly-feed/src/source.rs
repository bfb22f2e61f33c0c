use async_trait::async_trait;

use crate::{error::Result, types::FeedItem};

/// Produces a point-in-time listing of upcoming shows.
///
/// Implementations must be `Send + Sync` so the tick engine can hold one
/// across await points.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the current snapshot.
    ///
    /// Any failure aborts the whole reconciliation pass; the caller keeps
    /// its previous schedule and retries on the next refresh tick.
    async fn fetch(&self) -> Result<Vec<FeedItem>>;
}

/// Recovers supplementary metadata for a single show.
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Channel name for `id`, or `None` when the page does not carry one.
    ///
    /// Errors never block admission of the show; the caller records the
    /// entry without a channel.
    async fn channel_for(&self, id: &str) -> Result<Option<String>>;
}
