//! `telly-notify` — the local notification surface.

pub mod desktop;
pub mod error;
pub mod types;

pub use desktop::DesktopNotifier;
pub use error::NotifyError;
pub use types::{Notification, Notifier, DEFAULT_ICON};
