/// One raw show record from a snapshot, prior to admission.
///
/// `raw_timestamp` stays unparsed here; the reconciler decides whether it
/// yields an admissible start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// External identifier, stable across snapshots of the same broadcast.
    pub id: String,
    pub title: String,
    /// RFC 2822 `pubDate` text as received.
    pub raw_timestamp: String,
}
