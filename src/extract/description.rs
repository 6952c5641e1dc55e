use scraper::Html;

use super::text_of;
use crate::config::SelectorSet;
use crate::record::Description;

/// Pulls the course description block. A present-but-blank block and a
/// missing block are different outcomes with different sentinels.
pub fn extract(doc: &Html, sel: &SelectorSet) -> Description {
    match doc.select(&sel.description_block).next() {
        Some(block) => {
            let text = text_of(block);
            if text.is_empty() {
                Description::Empty
            } else {
                Description::Text(text)
            }
        }
        None => Description::NotFound,
    }
}

// ── Tests ──
