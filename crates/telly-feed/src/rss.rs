//! RSS snapshot extraction.
//!
//! Only three fields of each `<item>` matter: the identifier (`<guid>`,
//! falling back to `<link>`), the title, and the raw `pubDate`. Everything
//! else in the document is ignored.

use serde::Deserialize;
use tracing::warn;

use crate::error::{FeedError, Result};
use crate::types::FeedItem;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(default, rename = "item")]
    items: Vec<RssItem>,
}

#[derive(Debug, Default, Deserialize)]
struct RssItem {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "pubDate")]
    pub_date: String,
    guid: Option<Guid>,
    link: Option<String>,
}

/// `<guid>` may carry an `isPermaLink` attribute; only the text matters.
#[derive(Debug, Default, Deserialize)]
struct Guid {
    #[serde(rename = "$text")]
    value: Option<String>,
}

/// Extract raw show records from an RSS document.
///
/// A document that is not well-formed RSS fails with
/// [`FeedError::Malformed`]. Individual items without any usable identifier
/// are skipped with a warning rather than failing the snapshot.
pub fn parse_snapshot(xml: &str) -> Result<Vec<FeedItem>> {
    let rss: Rss = quick_xml::de::from_str(xml).map_err(|e| FeedError::Malformed(e.to_string()))?;

    let mut records = Vec::with_capacity(rss.channel.items.len());
    for item in rss.channel.items {
        let id = item
            .guid
            .and_then(|g| g.value)
            .or(item.link)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let Some(id) = id else {
            warn!(title = %item.title, "feed item without guid or link, skipped");
            continue;
        };

        records.push(FeedItem {
            id,
            title: item.title.trim().to_string(),
            raw_timestamp: item.pub_date,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0">
  <channel>
    <title>Personal schedule</title>
    <link>http://vtelevizi.cz/</link>
    <item>
      <title>Evening News</title>
      <link>http://vtelevizi.cz/detail/101</link>
      <guid isPermaLink="false">101</guid>
      <pubDate>Mon, 12 Jan 2026 19:15:00 +0100</pubDate>
    </item>
    <item>
      <title><![CDATA[Late Movie]]></title>
      <link>http://vtelevizi.cz/detail/102</link>
      <pubDate>Mon, 12 Jan 2026 22:00:00 +0100</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn extracts_items_in_document_order() {
        let records = parse_snapshot(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "101");
        assert_eq!(records[0].title, "Evening News");
        assert_eq!(records[0].raw_timestamp, "Mon, 12 Jan 2026 19:15:00 +0100");
    }

    #[test]
    fn link_is_the_id_fallback() {
        let records = parse_snapshot(SAMPLE).unwrap();
        assert_eq!(records[1].id, "http://vtelevizi.cz/detail/102");
        assert_eq!(records[1].title, "Late Movie");
    }

    #[test]
    fn item_without_identifier_is_skipped() {
        let xml = r#"<rss><channel>
            <item><title>Orphan</title><pubDate>Mon, 12 Jan 2026 20:00:00 +0100</pubDate></item>
            <item><guid>7</guid><title>Kept</title><pubDate>Mon, 12 Jan 2026 21:00:00 +0100</pubDate></item>
        </channel></rss>"#;
        let records = parse_snapshot(xml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "7");
    }

    #[test]
    fn empty_channel_is_an_empty_snapshot() {
        let records = parse_snapshot("<rss><channel></channel></rss>").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn non_xml_is_malformed() {
        let err = parse_snapshot("503 Service Unavailable").unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
    }
}
