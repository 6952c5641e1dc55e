//! Listing discovery and per-entry assembly.
//!
//! One listing fetch, then a bounded pool of detail fetches. Workers report
//! `(listing index, outcome)` over a channel and the collector sorts by
//! index, so catalog order is listing order no matter which fetch finishes
//! first. A failed entry is dropped alone; its siblings are untouched.

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use scraper::{ElementRef, Html};
use tokio::sync::Semaphore;
use tracing::{info, warn};
use url::Url;

use crate::config::{CatalogConfig, SelectorSet};
use crate::error::ScrapeError;
use crate::extract::{extract_fields, text_of};
use crate::fetch::Fetch;
use crate::record::{Catalog, CourseRecord, FieldShape};

/// One course entry as enumerated on the listing page.
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub index: usize,
    pub name: String,
    pub url: Url,
}

/// Enumerates course entries from the listing markup.
///
/// An entry missing its name or link is logged and skipped; the listing
/// selector matching nothing at all is the unrecoverable case and comes
/// back as `ListingAbsent`.
pub fn discover(
    listing: &str,
    sel: &SelectorSet,
    base: &Url,
) -> Result<Vec<ListingEntry>, ScrapeError> {
    let doc = Html::parse_document(listing);
    let nodes: Vec<ElementRef<'_>> = doc.select(&sel.listing_entry).collect();
    if nodes.is_empty() {
        return Err(ScrapeError::ListingAbsent {
            selector: sel.raw.listing_entry.clone(),
        });
    }

    let mut entries = Vec::with_capacity(nodes.len());
    for (index, node) in nodes.into_iter().enumerate() {
        match entry_from_node(index, node, sel, base) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("skipping course entry {index}: {err}"),
        }
    }
    Ok(entries)
}

fn entry_from_node(
    index: usize,
    node: ElementRef<'_>,
    sel: &SelectorSet,
    base: &Url,
) -> Result<ListingEntry, ScrapeError> {
    let name = node
        .select(&sel.entry_name)
        .next()
        .map(text_of)
        .unwrap_or_default();
    if name.is_empty() {
        return Err(ScrapeError::EntryIncomplete { index, what: "name" });
    }

    let anchor = node
        .select(&sel.entry_link)
        .next()
        .ok_or(ScrapeError::EntryIncomplete { index, what: "link" })?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or(ScrapeError::EntryIncomplete { index, what: "href" })?;
    let url = base.join(href).map_err(|source| ScrapeError::BadLink {
        index,
        href: href.to_string(),
        source,
    })?;

    Ok(ListingEntry { index, name, url })
}

/// Runs the whole pipeline: listing fetch, discovery, concurrent detail
/// fetches, record assembly.
///
/// A listing-level failure (transport or no matching entries) ends the run
/// with an empty catalog rather than an error; the caller still feeds both
/// sinks. The only errors that propagate are configuration-level (a
/// selector that does not compile).
pub async fn build_catalog<F: Fetch>(
    fetcher: Arc<F>,
    config: &CatalogConfig,
) -> Result<Catalog, ScrapeError> {
    let sel = Arc::new(SelectorSet::compile(&config.selectors)?);

    let listing = match fetcher.get(config.base_url.as_str()).await {
        Ok(body) => body,
        Err(err) => {
            warn!("listing fetch failed, catalog is empty: {err}");
            return Ok(Catalog::empty(config.shape));
        }
    };

    let mut entries = match discover(&listing, &sel, &config.base_url) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("{err}; catalog is empty");
            return Ok(Catalog::empty(config.shape));
        }
    };
    if let Some(limit) = config.limit {
        entries.truncate(limit);
    }

    let records = assemble(fetcher, entries, sel, config.shape, config.concurrency).await;
    Ok(Catalog::new(config.shape, records))
}

/// Fetches and assembles the given entries under a bounded worker pool,
/// returning records in listing order.
pub async fn assemble<F: Fetch>(
    fetcher: Arc<F>,
    entries: Vec<ListingEntry>,
    sel: Arc<SelectorSet>,
    shape: FieldShape,
    concurrency: usize,
) -> Vec<CourseRecord> {
    let total = entries.len();
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
            .unwrap()
            .progress_chars("=> "),
    );

    // Workers send (listing index, outcome); the collector below is the
    // only place results are gathered.
    let (tx, mut rx) = tokio::sync::mpsc::channel::<(usize, Option<CourseRecord>)>(
        concurrency.max(1) * 2,
    );

    for entry in entries {
        let fetcher = Arc::clone(&fetcher);
        let sem = Arc::clone(&semaphore);
        let sel = Arc::clone(&sel);
        let tx = tx.clone();

        tokio::spawn(async move {
            let _permit = sem.acquire().await.unwrap();
            info!("fetching course page {}", entry.url);
            let outcome = fetcher.get(entry.url.as_str()).await;
            match build_record(&entry, outcome, &sel, shape) {
                Ok(record) => {
                    let _ = tx.send((entry.index, Some(record))).await;
                }
                Err(err) => {
                    warn!("dropping course entry {} ({}): {err}", entry.index, entry.name);
                    let _ = tx.send((entry.index, None)).await;
                }
            }
        });
    }

    // Drop our copy of tx so rx closes when all spawned tasks finish
    drop(tx);

    let mut collected: Vec<(usize, CourseRecord)> = Vec::with_capacity(total);
    while let Some((index, record)) = rx.recv().await {
        if let Some(record) = record {
            collected.push((index, record));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Listing order, not completion order.
    collected.sort_by_key(|(index, _)| *index);
    collected.into_iter().map(|(_, record)| record).collect()
}

/// Builds one record from a detail-fetch outcome. A transport failure is
/// not a drop: every extractor maps it to its own sentinel. The one drop
/// left at this level is a malformed topic count.
fn build_record(
    entry: &ListingEntry,
    outcome: Result<String, ScrapeError>,
    sel: &SelectorSet,
    shape: FieldShape,
) -> Result<CourseRecord, ScrapeError> {
    let page = match outcome {
        Ok(body) => Some(Html::parse_document(&body)),
        Err(err) => {
            warn!("detail fetch for {} failed: {err}", entry.name);
            None
        }
    };

    let fields = extract_fields(page.as_ref(), sel, shape)?;
    Ok(CourseRecord {
        name: entry.name.clone(),
        description: fields.description,
        study_options: fields.study_options,
        module_stats: fields.module_stats,
    })
}

// ── Tests ──
