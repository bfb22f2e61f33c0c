use crate::types::ShowEntry;

/// The owned, deduplicated, time-ordered set of tracked shows.
///
/// Entries are unique by id and iterate in ascending `(start_time, id)`
/// order, the invariant the per-tick scan short-circuits on. A personal
/// schedule stays small, so a sorted vector is the whole store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ShowEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&ShowEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert preserving time order.
    ///
    /// Returns `false` (dropping `entry`) when the id is already tracked.
    pub fn insert(&mut self, entry: ShowEntry) -> bool {
        if self.contains(&entry.id) {
            return false;
        }
        let at = self.entries.partition_point(|e| {
            (e.start_time, e.id.as_str()) <= (entry.start_time, entry.id.as_str())
        });
        self.entries.insert(at, entry);
        true
    }

    /// Keep only entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ShowEntry) -> bool,
    {
        self.entries.retain(|e| keep(e));
    }

    /// Entries in ascending start-time order.
    pub fn iter(&self) -> impl Iterator<Item = &ShowEntry> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<ShowEntry> {
        &mut self.entries
    }
}
