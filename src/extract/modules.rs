use scraper::Html;

use super::text_of;
use crate::config::SelectorSet;
use crate::error::ScrapeError;
use crate::record::{ModuleCount, TopicCount};

/// Counts module items and sums the topic totals printed on them.
///
/// A missing container, or a container with zero items, yields the "Not
/// found" sentinel with topics left at 0 (the two stay distinguishable in
/// the record). An item without a topic label contributes 0. A label whose
/// leading token is not a number is the one hard failure here: it aborts
/// the whole entry instead of degrading.
pub fn extract(doc: &Html, sel: &SelectorSet) -> Result<(ModuleCount, TopicCount), ScrapeError> {
    let Some(list) = doc.select(&sel.module_list).next() else {
        return Ok((ModuleCount::NotFound, TopicCount::Total(0)));
    };

    let items: Vec<_> = list.select(&sel.module_item).collect();
    if items.is_empty() {
        return Ok((ModuleCount::NotFound, TopicCount::Total(0)));
    }

    let mut topics: u32 = 0;
    for item in &items {
        let Some(label) = item.select(&sel.topic_count).next() else {
            continue;
        };
        // Label reads "<integer> <word>", e.g. "12 тем". Only the leading
        // token is numeric.
        let text = text_of(label);
        let token = text.split_whitespace().next().unwrap_or("");
        let count: u32 = token.parse().map_err(|source| ScrapeError::MalformedCount {
            text: text.clone(),
            source,
        })?;
        topics += count;
    }

    Ok((ModuleCount::Counted(items.len()), TopicCount::Total(topics)))
}

// ── Tests ──
