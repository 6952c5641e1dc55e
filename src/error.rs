use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while building the course catalog.
///
/// Field-level fallbacks never surface here; extractors resolve those to
/// sentinel values. What remains is the transport layer, listing-level
/// discovery, per-entry structural gaps, and the one strict parse.
#[derive(Debug, Error, Clone)]
pub enum ScrapeError {
    /// HTTP request failed: connection, timeout, or non-2xx status.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The listing page has no nodes matching the entry signature.
    #[error("no course entries match `{selector}` on the listing page")]
    ListingAbsent { selector: String },

    /// A listing entry lacks a structural piece (name node, link anchor).
    #[error("course entry {index}: {what} not found")]
    EntryIncomplete { index: usize, what: &'static str },

    /// An entry's href does not resolve against the base origin.
    #[error("course entry {index}: link `{href}` does not resolve")]
    BadLink {
        index: usize,
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// A topic-count label is present but its leading token is not a number.
    #[error("malformed topic count `{text}`")]
    MalformedCount {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A configured structural signature is not valid CSS.
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Transport {
            message: err.to_string(),
        }
    }
}
