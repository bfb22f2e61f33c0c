//! Channel extraction from a show detail page.
//!
//! The detail page labels the broadcast channel with a marker paragraph and
//! puts the channel name in the paragraph that follows it. The page is
//! parsed into a tree once and the lookup is a pure query over that tree.

use scraper::{Html, Selector};

/// Label text marking the paragraph that precedes the channel name.
const CHANNEL_LABEL: &str = "Kanál";

/// Find the paragraph following the one carrying the channel label.
///
/// Returns `None` when the page has no label or the labelled paragraph is
/// the last one.
pub fn extract_channel(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return None;
    };

    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect();

    let label_at = paragraphs.iter().position(|t| t.contains(CHANNEL_LABEL))?;
    paragraphs
        .get(label_at + 1)
        .filter(|t| !t.is_empty())
        .cloned()
}
