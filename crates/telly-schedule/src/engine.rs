use chrono::{Duration, NaiveDateTime};
use tokio::sync::watch;
use tracing::{debug, error, info};

use telly_core::{config::TellyConfig, time};
use telly_feed::{DetailSource, SnapshotSource};
use telly_notify::Notifier;

use crate::lifecycle;
use crate::reconcile;
use crate::schedule::Schedule;

/// The driving loop: owns the schedule value and advances it once per tick.
///
/// Every `refresh_every_ticks` ticks (including tick 0) a fresh snapshot is
/// reconciled in; every tick the lifecycle evaluation runs. All feed,
/// enrichment and notifier failures are logged inside the tick body; none
/// of them ends the loop.
pub struct TickEngine<S, D, N> {
    snapshots: S,
    details: D,
    notifier: N,
    tick_secs: u64,
    refresh_every_ticks: u64,
    lead: Duration,
    shift_hours: i64,
    schedule: Schedule,
    counter: u64,
}

impl<S, D, N> TickEngine<S, D, N>
where
    S: SnapshotSource,
    D: DetailSource,
    N: Notifier,
{
    pub fn new(config: &TellyConfig, snapshots: S, details: D, notifier: N) -> Self {
        Self {
            snapshots,
            details,
            notifier,
            tick_secs: config.schedule.tick_secs.max(1),
            // zero would never refresh and break the modulo below
            refresh_every_ticks: config.schedule.refresh_every_ticks.max(1),
            lead: Duration::minutes(config.schedule.lead_minutes),
            shift_hours: config.feed.shift_hours,
            schedule: Schedule::new(),
            counter: 0,
        }
    }

    /// Run until `shutdown` flips to `true`.
    ///
    /// The flip is honoured between ticks; a tick in flight always completes
    /// first. This is the normal termination path, not a failure.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!("tick engine started");
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(self.tick_secs));
        loop {
            tokio::select! {
                _ = interval.tick() => self.tick().await,
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("tick engine shutting down");
                        break;
                    }
                }
            }
        }
    }

    async fn tick(&mut self) {
        let now = time::local_now();
        if self.counter % self.refresh_every_ticks == 0 {
            self.refresh(now).await;
        }

        let dispatched = lifecycle::evaluate(&mut self.schedule, now, self.lead, &self.notifier);
        if dispatched > 0 {
            debug!(dispatched, tick = self.counter, "alerts dispatched");
        }
        self.counter += 1;
    }

    async fn refresh(&mut self, now: NaiveDateTime) {
        debug!("refreshing snapshot");
        match self.snapshots.fetch().await {
            Ok(snapshot) => {
                let previous = std::mem::take(&mut self.schedule);
                self.schedule =
                    reconcile::reconcile(previous, &snapshot, now, self.shift_hours, &self.details)
                        .await;
                info!(records = self.schedule.len(), "records in your personal schedule");
            }
            // Stale-but-consistent: the previous schedule stays in place and
            // the next refresh tick retries.
            Err(e) => error!(error = %e, "snapshot refresh failed"),
        }
    }
}
