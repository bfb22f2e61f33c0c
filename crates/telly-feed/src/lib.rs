//! `telly-feed` — upstream feed access for the schedule watcher.
//!
//! # Overview
//!
//! The upstream service exposes two read-only surfaces:
//!
//! | Surface  | URL                                | Payload |
//! |----------|------------------------------------|---------|
//! | Snapshot | `{base}/export/rss/{account}/{token}` | RSS listing of upcoming airings |
//! | Detail   | `{base}/detail/{id}`               | HTML page carrying the channel name |
//!
//! [`HttpFeed`] implements both [`SnapshotSource`] and [`DetailSource`] over
//! a single reqwest client. The traits are the seam the reconciler and tick
//! engine are generic over, so tests substitute in-memory doubles.

pub mod client;
pub mod detail;
pub mod error;
pub mod rss;
pub mod source;
pub mod types;

pub use client::HttpFeed;
pub use error::{FeedError, Result};
pub use source::{DetailSource, SnapshotSource};
pub use types::FeedItem;
