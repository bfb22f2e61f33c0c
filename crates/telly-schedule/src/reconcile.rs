//! Snapshot reconciliation: merge a fresh upstream listing into the
//! persistent schedule.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use telly_core::time;
use telly_feed::{DetailSource, FeedItem};

use crate::schedule::Schedule;
use crate::types::{ShowEntry, ShowState};

/// Merge `snapshot` into `schedule` as observed at `now`.
///
/// The upstream source is authoritative for membership: ids it no longer
/// lists are dropped unconditionally, which lets an upstream cancellation
/// retract a pending alert. Ids already tracked are never updated from a
/// later snapshot. New ids are admitted only with a start time strictly in
/// the future, in state `Pending`; enrichment is best-effort and never
/// blocks admission.
pub async fn reconcile<D>(
    mut schedule: Schedule,
    snapshot: &[FeedItem],
    now: NaiveDateTime,
    shift_hours: i64,
    details: &D,
) -> Schedule
where
    D: DetailSource + ?Sized,
{
    let listed: HashSet<&str> = snapshot.iter().map(|i| i.id.as_str()).collect();
    let before = schedule.len();
    schedule.retain(|entry| listed.contains(entry.id.as_str()));
    let retracted = before - schedule.len();
    if retracted > 0 {
        info!(retracted, "entries no longer listed upstream");
    }

    for item in snapshot {
        // Admitted entries are never refreshed from later snapshots.
        if schedule.contains(&item.id) {
            continue;
        }

        let start = match time::parse_show_time(&item.raw_timestamp, shift_hours) {
            Ok(t) => t,
            Err(e) => {
                warn!(id = %item.id, raw = %item.raw_timestamp, error = %e,
                    "unparseable timestamp, record skipped");
                continue;
            }
        };

        // A broadcast already underway is never tracked.
        if start <= now {
            continue;
        }

        let channel = match details.channel_for(&item.id).await {
            Ok(channel) => channel,
            Err(e) => {
                debug!(id = %item.id, error = %e, "enrichment failed, admitting without channel");
                None
            }
        };

        schedule.insert(ShowEntry {
            id: item.id.clone(),
            title: item.title.clone(),
            start_time: start,
            channel,
            state: ShowState::Pending,
        });
    }

    schedule
}
