use scraper::Html;

use super::text_of;
use crate::config::SelectorSet;
use crate::record::{StudyMode, StudyOptions};

/// Detects offered study modes by exact link-text match against the site's
/// enrollment vocabulary. Modes come back in `StudyMode::ALL` order no
/// matter where their links sit on the page.
pub fn extract(doc: &Html, sel: &SelectorSet) -> StudyOptions {
    let modes: Vec<StudyMode> = StudyMode::ALL
        .into_iter()
        .filter(|mode| {
            doc.select(&sel.study_link)
                .any(|link| text_of(link) == mode.label())
        })
        .collect();
    StudyOptions::Modes(modes)
}

// ── Tests ──
