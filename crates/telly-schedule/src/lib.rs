//! `telly-schedule` — schedule reconciliation and the notification state
//! machine.
//!
//! # Entry lifecycle
//!
//! | State      | Meaning                                                 |
//! |------------|---------------------------------------------------------|
//! | `Pending`  | Admitted, alert window not yet reached                  |
//! | `Alerting` | Inside the lead window; re-alerts every tick until start |
//! | `Expired`  | Start time reached; terminal, entry leaves the schedule |
//!
//! The [`engine::TickEngine`] drives everything: every `refresh_every_ticks`
//! ticks it merges a fresh snapshot via [`reconcile::reconcile`], and every
//! tick it advances entry lifecycles via [`lifecycle::evaluate`].

pub mod engine;
pub mod lifecycle;
pub mod reconcile;
pub mod schedule;
pub mod types;

pub use engine::TickEngine;
pub use lifecycle::evaluate;
pub use reconcile::reconcile;
pub use schedule::Schedule;
pub use types::{ShowEntry, ShowState};
