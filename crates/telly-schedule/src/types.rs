use chrono::NaiveDateTime;

/// Lifecycle state of a tracked broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    /// Waiting for its alert window.
    Pending,
    /// Inside the lead window; an alert fires every tick until start.
    Alerting,
    /// Start time reached. Terminal: the entry leaves the schedule.
    Expired,
}

impl std::fmt::Display for ShowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShowState::Pending => "pending",
            ShowState::Alerting => "alerting",
            ShowState::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// One tracked broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    /// External identifier, unique within the schedule and stable across
    /// snapshots of the same broadcast.
    pub id: String,
    pub title: String,
    /// Local wall-clock start, normalised at admission.
    pub start_time: NaiveDateTime,
    /// Populated from the detail page at admission; `None` when enrichment
    /// failed or was skipped.
    pub channel: Option<String>,
    pub state: ShowState,
}
