use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification daemon rejected or never received the request.
    #[error("Display failed: {0}")]
    DisplayFailed(String),
}
