use std::fs;
use std::path::{Path, PathBuf};

use scraper::Selector;
use serde::Deserialize;
use url::Url;

use crate::error::ScrapeError;
use crate::record::FieldShape;

pub const DEFAULT_BASE_URL: &str = "https://mate.academy/";
pub const DEFAULT_OUTPUT: &str = "courses_info.csv";
pub const DEFAULT_CONCURRENCY: usize = 4;

/// CSS selectors and the base origin are data, not code. This is the full
/// table; a JSON override file may replace any subset of it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub listing_entry: String,
    pub entry_name: String,
    pub entry_link: String,
    pub description_block: String,
    pub study_link: String,
    pub module_list: String,
    pub module_item: String,
    pub topic_count: String,
    pub feature_row: String,
    pub feature_title: String,
    pub feature_content: String,
}

impl Default for Selectors {
    fn default() -> Selectors {
        Selectors {
            listing_entry: "div.DropdownProfessionsItem_item__BRxO2".into(),
            entry_name: "span.ButtonBody_buttonText__34ExO".into(),
            entry_link: "a[href]".into(),
            description_block:
                "pre.typography_landingTextMain__Rc8BD.SalarySection_aboutProfession__1VFHK".into(),
            study_link: "a".into(),
            module_list: "ul.CourseModulesList_modulesList__C86yL".into(),
            module_item: "li.color-dark-blue".into(),
            topic_count: "p.CourseModulesList_topicsCount__H_fv3.typography_textMain__oRJ69".into(),
            feature_row: "div.TableFeedView_rowWithButtons__j6_7p".into(),
            feature_title: "div.TableFeedView_rowTitle__X_wrw".into(),
            feature_content: "div.TableFeedView_rowContent__Nih2n".into(),
        }
    }
}

impl Selectors {
    /// Loads a JSON override file. Missing keys fall back to the defaults,
    /// so a file may pin down a single renamed class.
    pub fn from_file(path: &Path) -> anyhow::Result<Selectors> {
        let text = fs::read_to_string(path)?;
        let selectors = serde_json::from_str(&text)?;
        Ok(selectors)
    }
}

/// Everything one run needs, resolved from the CLI before any request.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub output: PathBuf,
    pub shape: FieldShape,
    pub concurrency: usize,
    pub limit: Option<usize>,
    pub save_csv: bool,
    pub selectors: Selectors,
}

/// The selector table compiled once per run. Every extractor borrows this;
/// a selector that does not parse fails the run before any fetch.
#[derive(Debug)]
pub struct SelectorSet {
    pub listing_entry: Selector,
    pub entry_name: Selector,
    pub entry_link: Selector,
    pub description_block: Selector,
    pub study_link: Selector,
    pub module_list: Selector,
    pub module_item: Selector,
    pub topic_count: Selector,
    pub feature_row: Selector,
    pub feature_title: Selector,
    pub feature_content: Selector,
    pub raw: Selectors,
}

fn compile_one(raw: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(raw).map_err(|e| ScrapeError::Selector {
        selector: raw.to_string(),
        message: e.to_string(),
    })
}

impl SelectorSet {
    pub fn compile(raw: &Selectors) -> Result<SelectorSet, ScrapeError> {
        Ok(SelectorSet {
            listing_entry: compile_one(&raw.listing_entry)?,
            entry_name: compile_one(&raw.entry_name)?,
            entry_link: compile_one(&raw.entry_link)?,
            description_block: compile_one(&raw.description_block)?,
            study_link: compile_one(&raw.study_link)?,
            module_list: compile_one(&raw.module_list)?,
            module_item: compile_one(&raw.module_item)?,
            topic_count: compile_one(&raw.topic_count)?,
            feature_row: compile_one(&raw.feature_row)?,
            feature_title: compile_one(&raw.feature_title)?,
            feature_content: compile_one(&raw.feature_content)?,
            raw: raw.clone(),
        })
    }
}

// ── Tests ──
