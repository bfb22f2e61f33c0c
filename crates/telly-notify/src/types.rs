use crate::error::NotifyError;

/// Icon hint passed along with every show alert.
pub const DEFAULT_ICON: &str = "video-display";

/// A single display request passed to a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: String,
}

/// Local notification surface.
///
/// Fire-and-forget: implementations report delivery to the surface, never
/// acknowledgement by the user. Must be `Send + Sync` so the tick engine can
/// hold one across await points.
pub trait Notifier: Send + Sync {
    fn display(&self, note: &Notification) -> Result<(), NotifyError>;
}
