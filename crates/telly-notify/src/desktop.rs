use crate::error::NotifyError;
use crate::types::{Notification, Notifier};

/// Desktop notifier backed by the session's notification daemon.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn display(&self, note: &Notification) -> Result<(), NotifyError> {
        notify_rust::Notification::new()
            .summary(&note.title)
            .body(&note.body)
            .icon(&note.icon)
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::DisplayFailed(e.to_string()))
    }
}
