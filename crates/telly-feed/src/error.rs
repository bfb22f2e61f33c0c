use thiserror::Error;

/// Errors raised while obtaining or interpreting the upstream feed.
///
/// The snapshot URL embeds the personal feed token, so neither it nor the
/// token ever appears in an error message.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure reaching the feed.
    #[error("Feed unavailable: {0}")]
    Unavailable(String),

    /// The feed payload did not parse as RSS.
    #[error("Feed malformed: {0}")]
    Malformed(String),

    /// The detail page for a show could not be fetched or read.
    #[error("Detail unavailable for {id}: {reason}")]
    DetailUnavailable { id: String, reason: String },
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        FeedError::Unavailable(e.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
