use scraper::Html;

use super::text_of;
use crate::config::SelectorSet;
use crate::record::Duration;

/// Label substring identifying the duration feature row. Matching token,
/// kept verbatim.
const DURATION_LABEL: &str = "Тривалість";

/// Walks the feature rows and keeps the content of the last row whose title
/// mentions the duration label. Last match wins; no row matching at all is
/// "Not found".
pub fn extract(doc: &Html, sel: &SelectorSet) -> Duration {
    let mut duration = Duration::NotFound;
    for row in doc.select(&sel.feature_row) {
        let title = row.select(&sel.feature_title).next();
        let content = row.select(&sel.feature_content).next();
        let (Some(title), Some(content)) = (title, content) else {
            continue;
        };
        if text_of(title).contains(DURATION_LABEL) {
            duration = Duration::Text(text_of(content));
        }
    }
    duration
}

// ── Tests ──
