//! Per-tick lifecycle evaluation.
//!
//! Entries are scanned in ascending start-time order and the scan stops at
//! the first entry eligible for nothing: eligibility is monotonic in time,
//! so no later entry can be eligible either.

use chrono::{Duration, NaiveDateTime};
use tracing::{info, warn};

use telly_core::time;
use telly_notify::{Notification, Notifier, DEFAULT_ICON};

use crate::schedule::Schedule;
use crate::types::{ShowEntry, ShowState};

/// Advance every eligible entry at `now`.
///
/// An entry at or past its start time expires and is removed without a
/// notification; this takes precedence over the alert window. An entry
/// inside the lead window moves to `Alerting` and fires one notifier call;
/// it fires again on every later tick until it expires, intentionally.
/// Returns the number of notifier calls made this tick.
pub fn evaluate<N>(schedule: &mut Schedule, now: NaiveDateTime, lead: Duration, notifier: &N) -> usize
where
    N: Notifier + ?Sized,
{
    let entries = schedule.entries_mut();
    let mut dispatched = 0;
    let mut idx = 0;

    while idx < entries.len() {
        let start = entries[idx].start_time;

        if now >= start {
            let entry = entries.remove(idx);
            info!(id = %entry.id, title = %entry.title, "wiping out entry, already running");
            continue;
        }

        if now >= start - lead {
            let entry = &mut entries[idx];
            entry.state = ShowState::Alerting;
            let note = alert_notification(entry);
            info!(id = %entry.id, title = %entry.title, "showing alert");
            if let Err(e) = notifier.display(&note) {
                warn!(id = %entry.id, error = %e, "notification failed");
            }
            dispatched += 1;
            idx += 1;
            continue;
        }

        // Ascending order: nothing later can be eligible yet.
        break;
    }

    dispatched
}

fn alert_notification(entry: &ShowEntry) -> Notification {
    let when = time::format_show_time(entry.start_time);
    let body = match entry.channel {
        Some(ref channel) => format!("{when} ({channel})"),
        None => when,
    };
    Notification {
        title: entry.title.clone(),
        body,
        icon: DEFAULT_ICON.to_string(),
    }
}
