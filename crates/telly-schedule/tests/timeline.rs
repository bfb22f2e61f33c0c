// Drive reconcile + evaluate over a simulated timeline, the way the tick
// engine sequences them, and check the externally visible behaviour.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};

use telly_feed::{DetailSource, FeedItem};
use telly_notify::{Notification, Notifier, NotifyError};
use telly_schedule::{evaluate, reconcile, Schedule, ShowState};

struct Recording(Mutex<Vec<Notification>>);

impl Recording {
    fn new() -> Self {
        Self(Mutex::new(Vec::new()))
    }
    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Notifier for Recording {
    fn display(&self, note: &Notification) -> Result<(), NotifyError> {
        self.0.lock().unwrap().push(note.clone());
        Ok(())
    }
}

struct NoDetails;

#[async_trait]
impl DetailSource for NoDetails {
    async fn channel_for(&self, _id: &str) -> telly_feed::Result<Option<String>> {
        Ok(None)
    }
}

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 12)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

fn item(id: &str, title: &str, start: NaiveDateTime) -> FeedItem {
    FeedItem {
        id: id.to_string(),
        title: title.to_string(),
        raw_timestamp: start.and_utc().to_rfc2822(),
    }
}

/// Scenario A: one show at t0+10m with a 2-minute lead. Ticks 0..=7 are
/// silent, ticks 8 and 9 each alert, tick 10 removes the entry silently.
#[tokio::test]
async fn one_show_alert_timeline() {
    let lead = Duration::minutes(2);
    let snapshot = vec![item("1", "Evening News", t0() + Duration::minutes(10))];
    let mut schedule = reconcile(Schedule::new(), &snapshot, t0(), 0, &NoDetails).await;
    let recording = Recording::new();

    for minute in 0..=7 {
        evaluate(&mut schedule, t0() + Duration::minutes(minute), lead, &recording);
    }
    assert_eq!(recording.count(), 0);
    assert_eq!(schedule.get("1").unwrap().state, ShowState::Pending);

    evaluate(&mut schedule, t0() + Duration::minutes(8), lead, &recording);
    assert_eq!(recording.count(), 1);
    assert_eq!(schedule.get("1").unwrap().state, ShowState::Alerting);

    evaluate(&mut schedule, t0() + Duration::minutes(9), lead, &recording);
    assert_eq!(recording.count(), 2);

    evaluate(&mut schedule, t0() + Duration::minutes(10), lead, &recording);
    assert_eq!(recording.count(), 2);
    assert!(schedule.is_empty());
}

/// An upstream retraction between refreshes cancels a pending alert: the
/// entry disappears before its window ever opens.
#[tokio::test]
async fn retraction_cancels_a_pending_alert() {
    let lead = Duration::minutes(2);
    let snapshot = vec![item("3", "Cancelled Show", t0() + Duration::minutes(20))];
    let mut schedule = reconcile(Schedule::new(), &snapshot, t0(), 0, &NoDetails).await;
    let recording = Recording::new();

    for minute in 0..5 {
        evaluate(&mut schedule, t0() + Duration::minutes(minute), lead, &recording);
    }

    // Next refresh no longer lists id=3.
    schedule = reconcile(schedule, &[], t0() + Duration::minutes(5), 0, &NoDetails).await;
    assert!(schedule.is_empty());

    for minute in 5..=21 {
        evaluate(&mut schedule, t0() + Duration::minutes(minute), lead, &recording);
    }
    assert_eq!(recording.count(), 0);
}

/// Overlapping shows: both alert during their own windows, and the schedule
/// stays time-ordered throughout.
#[tokio::test]
async fn overlapping_windows_alert_independently() {
    let lead = Duration::minutes(2);
    let snapshot = vec![
        item("a", "First", t0() + Duration::minutes(3)),
        item("b", "Second", t0() + Duration::minutes(4)),
    ];
    let mut schedule = reconcile(Schedule::new(), &snapshot, t0(), 0, &NoDetails).await;
    let recording = Recording::new();

    // minute 1: only "a" is inside its window
    evaluate(&mut schedule, t0() + Duration::minutes(1), lead, &recording);
    assert_eq!(recording.count(), 1);
    assert_eq!(schedule.get("b").unwrap().state, ShowState::Pending);

    // minute 2: both windows open
    evaluate(&mut schedule, t0() + Duration::minutes(2), lead, &recording);
    assert_eq!(recording.count(), 3);

    // minute 3: "a" expires silently, "b" alerts again
    evaluate(&mut schedule, t0() + Duration::minutes(3), lead, &recording);
    assert_eq!(recording.count(), 4);
    assert!(!schedule.contains("a"));

    // minute 4: "b" expires; nothing remains
    evaluate(&mut schedule, t0() + Duration::minutes(4), lead, &recording);
    assert_eq!(recording.count(), 4);
    assert!(schedule.is_empty());
}

/// A snapshot can mix already-running, new and known records; only the
/// admissible ones survive, in order.
#[tokio::test]
async fn mixed_snapshot_reconciles_to_an_ordered_future_only_schedule() {
    let snapshot = vec![
        item("past", "Already Running", t0() - Duration::minutes(5)),
        item("late", "Late Film", t0() + Duration::minutes(60)),
        item("soon", "Starting Soon", t0() + Duration::minutes(5)),
    ];
    let schedule = reconcile(Schedule::new(), &snapshot, t0(), 0, &NoDetails).await;

    let ids: Vec<&str> = schedule.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["soon", "late"]);
    assert!(schedule.iter().all(|e| e.start_time > t0()));
    assert!(schedule.iter().all(|e| e.state == ShowState::Pending));
}
