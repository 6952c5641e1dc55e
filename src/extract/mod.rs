//! Field extractors for course detail pages.
//!
//! Each extractor owns one field, takes the parsed page plus the selector
//! set, and returns a renderable value. Absence turns into that field's
//! sentinel here, so the assembler never handles a missing value.

use scraper::{ElementRef, Html};

use crate::config::SelectorSet;
use crate::error::ScrapeError;
use crate::record::{
    Description, Duration, FieldShape, ModuleCount, ModuleStats, StudyOptions, TopicCount,
};

mod description;
mod duration;
mod modules;
mod study;

/// Text content of an element, child nodes concatenated, outer whitespace
/// trimmed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// The per-course field block, one slot per detail-page extractor.
#[derive(Debug)]
pub struct ExtractedFields {
    pub description: Description,
    pub study_options: StudyOptions,
    pub module_stats: Option<ModuleStats>,
}

/// Runs every extractor the shape asks for against one detail page.
///
/// `page` is `None` when the detail fetch failed; every field then carries
/// its fetch-error sentinel and the record still gets built. The only hard
/// failure left is a malformed topic count, which aborts this entry alone.
pub fn extract_fields(
    page: Option<&Html>,
    sel: &SelectorSet,
    shape: FieldShape,
) -> Result<ExtractedFields, ScrapeError> {
    let Some(doc) = page else {
        return Ok(ExtractedFields {
            description: Description::FetchError,
            study_options: StudyOptions::FetchError,
            module_stats: shape.include_module_stats.then_some(ModuleStats {
                modules: ModuleCount::FetchError,
                topics: TopicCount::FetchError,
                duration: Duration::FetchError,
            }),
        });
    };

    let description = description::extract(doc, sel);
    let study_options = study::extract(doc, sel);
    let module_stats = if shape.include_module_stats {
        let (modules, topics) = modules::extract(doc, sel)?;
        let duration = duration::extract(doc, sel);
        Some(ModuleStats {
            modules,
            topics,
            duration,
        })
    } else {
        None
    };

    Ok(ExtractedFields {
        description,
        study_options,
        module_stats,
    })
}

// ── Tests ──

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;

    use super::*;
    use crate::config::Selectors;

    pub(crate) fn fixture(name: &str) -> Html {
        let path = format!("tests/fixtures/{name}");
        let html = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read fixture {path}: {e}"));
        Html::parse_document(&html)
    }

    pub(crate) fn selector_set() -> SelectorSet {
        SelectorSet::compile(&Selectors::default()).unwrap()
    }

    #[test]
    fn failed_fetch_yields_sentinels_for_every_field() {
        let sel = selector_set();
        let fields = extract_fields(None, &sel, FieldShape::FULL).unwrap();
        assert_eq!(fields.description, Description::FetchError);
        assert_eq!(fields.study_options, StudyOptions::FetchError);
        let stats = fields.module_stats.unwrap();
        assert_eq!(stats.modules, ModuleCount::FetchError);
        assert_eq!(stats.topics, TopicCount::FetchError);
        assert_eq!(stats.duration, Duration::FetchError);
    }

    #[test]
    fn basic_shape_skips_module_extraction_entirely() {
        let sel = selector_set();
        // This page carries a non-numeric topic label. With module stats
        // disabled the label is never parsed, so the entry survives.
        let doc = fixture("course_malformed.html");
        let fields = extract_fields(Some(&doc), &sel, FieldShape::BASIC).unwrap();
        assert!(fields.module_stats.is_none());
    }

    #[test]
    fn full_shape_rejects_malformed_topic_counts() {
        let sel = selector_set();
        let doc = fixture("course_malformed.html");
        let err = extract_fields(Some(&doc), &sel, FieldShape::FULL).unwrap_err();
        assert!(matches!(err, ScrapeError::MalformedCount { .. }));
    }
}
