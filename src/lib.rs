//! Gigsift - classified-ad tech gig finder
//!
//! Turns raw classified-ad listings scraped from many sources into a
//! deduplicated, categorized and ranked set of tech gigs.
//!
//! # Architecture
//!
//! Every raw listing runs through a fixed four-stage pipeline:
//! 1. Exclusion filter (modeling calls, paid studies, manual labor, ...)
//! 2. Duplicate detection on normalized title and raw link
//! 3. Keyword classification into category tags
//! 4. Optional posting-date enrichment
//!
//! Emitted listings are then grouped by region and ranked by how many
//! category tags they matched.
//!
//! # Example
//!
//! ```
//! use gigsift::dedupe::DedupeState;
//! use gigsift::pipeline::Pipeline;
//! use gigsift::RawListing;
//!
//! let pipeline = Pipeline::default();
//! let mut state = DedupeState::new();
//!
//! let raw = RawListing::new("React Native developer for startup", "https://sfbay.example/1")
//!     .with_source("SF Bay Area", "sfbay")
//!     .with_section("cpg");
//!
//! let listing = pipeline.process(&raw, &mut state, |_| None).unwrap();
//! assert!(listing.categories().iter().any(|c| c.as_str() == "mobile_dev"));
//!
//! // Same posting again is suppressed
//! assert!(pipeline.process(&raw, &mut state, |_| None).is_none());
//! assert_eq!(state.duplicate_count(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use category::CategoryTag;
pub use error::Error;

// Category tags
pub mod category;

// Keyword classification
pub mod classify;

// False-positive exclusion
pub mod exclude;

// Title normalization and duplicate detection
pub mod dedupe;

// Per-listing pipeline
pub mod pipeline;

// Region grouping and ranking
pub mod aggregate;
pub mod region;

// Source directory and fetching seam
pub mod fetch;
pub mod sites;

// Whole-run orchestration and reporting
pub mod config;
pub mod report;
pub mod search;
pub mod summary;

mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum Error {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
        #[error("Pattern error in {group}: {source}")]
        Pattern {
            group: String,
            #[source]
            source: regex::Error,
        },
        #[error("Unknown source: {0}")]
        UnknownSource(String),
        #[error("Invalid input: {0}")]
        InvalidInput(String),
    }
}

/// Price label used when a listing carries no price.
pub const PRICE_NOT_SPECIFIED: &str = "Not specified";

/// A listing as scraped from a source, before any filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    pub title: String,
    pub link: String,
    /// Location text, empty when the source has none
    pub location_text: String,
    /// Price text, empty when the source has none
    pub price_text: String,
    /// Human-readable source name ("SF Bay Area")
    pub source_name: String,
    /// Stable source identifier ("sfbay")
    pub source_id: String,
    /// Section code the listing was found in ("cpg")
    pub section: String,
}

impl RawListing {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.source_name = name.into();
        self.source_id = id.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_text = location.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price_text = price.into();
        self
    }
}

/// Posting date block from a listing's detail page.
///
/// A detail page either yields a date block or it does not, so absence is
/// modelled as `Option<PostingDate>` on the listing. Inside a block any of
/// the values may still be missing from the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingDate {
    /// Machine-parsable timestamp
    #[serde(default)]
    pub datetime: Option<String>,
    /// Human label
    #[serde(default)]
    pub formatted: Option<String>,
    /// Relative age ("3 hours ago")
    #[serde(default)]
    pub relative: Option<String>,
}

impl PostingDate {
    pub fn new(
        datetime: impl Into<String>,
        formatted: impl Into<String>,
        relative: impl Into<String>,
    ) -> Self {
        Self {
            datetime: Some(datetime.into()),
            formatted: Some(formatted.into()),
            relative: Some(relative.into()),
        }
    }

    /// True when the block carries no value at all.
    pub fn is_empty(&self) -> bool {
        self.datetime.is_none() && self.formatted.is_none() && self.relative.is_none()
    }
}

/// A relevant listing that passed exclusion, dedupe and classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    #[serde(rename = "site")]
    pub source_name: String,
    #[serde(rename = "site_code")]
    pub source_id: String,
    pub title: String,
    pub link: String,
    pub location: String,
    pub price: String,
    categories: BTreeSet<CategoryTag>,
    pub section: String,
    #[serde(rename = "date", with = "date_block")]
    pub posting_date: Option<PostingDate>,
    #[serde(rename = "date_found")]
    pub discovered_at: DateTime<Utc>,
}

impl Listing {
    /// Build a listing from its raw record.
    ///
    /// Returns `None` when `categories` is empty: an uncategorized listing
    /// is not relevant and never exists as a `Listing`.
    pub fn new(
        raw: &RawListing,
        categories: BTreeSet<CategoryTag>,
        posting_date: Option<PostingDate>,
    ) -> Option<Self> {
        if categories.is_empty() {
            return None;
        }

        let price = if raw.price_text.trim().is_empty() {
            PRICE_NOT_SPECIFIED.to_string()
        } else {
            raw.price_text.clone()
        };

        Some(Self {
            source_name: raw.source_name.clone(),
            source_id: raw.source_id.clone(),
            title: raw.title.clone(),
            link: raw.link.clone(),
            location: raw.location_text.clone(),
            price,
            categories,
            section: raw.section.clone(),
            posting_date,
            discovered_at: Utc::now(),
        })
    }

    /// Matched category tags, never empty.
    pub fn categories(&self) -> &BTreeSet<CategoryTag> {
        &self.categories
    }
}

// Serializes an absent posting date as a block of nulls so every listing
// in the report has the same `date` shape.
mod date_block {
    use serde::{Serialize, Serializer};

    use crate::PostingDate;

    pub fn serialize<S: Serializer>(
        date: &Option<PostingDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => d.serialize(serializer),
            None => PostingDate::default().serialize(serializer),
        }
    }
}
