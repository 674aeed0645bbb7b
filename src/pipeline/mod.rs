//! Per-listing pipeline.
//!
//! Runs the stages in a fixed order and returns as soon as one of them
//! drops the listing:
//!
//! exclude → dedupe → classify → enrich
//!
//! The order matters. Excluded listings never reach the duplicate detector,
//! so they neither pollute its seen-sets nor count as duplicates.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use gigsift::dedupe::DedupeState;
//! use gigsift::pipeline::{DropReason, Pipeline};
//! use gigsift::RawListing;
//!
//! let pipeline = Pipeline::default();
//! let mut state = DedupeState::new();
//!
//! let raw = RawListing::new("Photo shoot model needed - must know Photoshop", "https://x/1");
//! let outcome = pipeline.evaluate(&raw, &mut state, |_| None);
//!
//! assert!(matches!(outcome, ControlFlow::Break(DropReason::Excluded(_))));
//! assert_eq!(state.seen_count(), 0);
//! ```

pub mod stages;

#[cfg(test)]
mod samples_test;

use std::fmt;
use std::ops::ControlFlow;

use crate::classify::KeywordClassifier;
use crate::dedupe::DedupeState;
use crate::exclude::ExclusionFilter;
use crate::{Listing, PostingDate, RawListing};

/// Why a raw listing produced no [`Listing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// Title matched the given exclusion pattern
    Excluded(String),
    /// Title or link already seen this run
    Duplicate,
    /// No category pattern matched
    Uncategorized,
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::Excluded(_) => "excluded",
            DropReason::Duplicate => "duplicate",
            DropReason::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exclusion filter plus keyword classifier, applied one listing at a time.
///
/// The pipeline itself is immutable; all per-run state lives in the
/// [`DedupeState`] passed to each call.
#[derive(Debug, Clone)]
pub struct Pipeline {
    filter: ExclusionFilter,
    classifier: KeywordClassifier,
}

impl Pipeline {
    pub fn new(filter: ExclusionFilter, classifier: KeywordClassifier) -> Self {
        Self { filter, classifier }
    }

    /// Run every stage, reporting why the listing was dropped.
    pub fn evaluate<F>(
        &self,
        raw: &RawListing,
        state: &mut DedupeState,
        date_lookup: F,
    ) -> ControlFlow<DropReason, Listing>
    where
        F: FnOnce(&str) -> Option<PostingDate>,
    {
        stages::exclude(&self.filter, raw)?;
        stages::dedupe(state, raw)?;
        let categories = stages::classify(&self.classifier, raw)?;
        stages::enrich(raw, categories, date_lookup)
    }

    /// Process one raw listing into zero or one [`Listing`].
    pub fn process<F>(
        &self,
        raw: &RawListing,
        state: &mut DedupeState,
        date_lookup: F,
    ) -> Option<Listing>
    where
        F: FnOnce(&str) -> Option<PostingDate>,
    {
        match self.evaluate(raw, state, date_lookup) {
            ControlFlow::Continue(listing) => {
                tracing::info!(
                    title = %listing.title,
                    posted = listing.posting_date.as_ref().and_then(|d| d.datetime.as_deref()).unwrap_or("unknown"),
                    "Found matching gig"
                );
                Some(listing)
            }
            ControlFlow::Break(reason) => {
                tracing::debug!(title = %raw.title, %reason, "dropped listing");
                None
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ExclusionFilter::default(), KeywordClassifier::default())
    }
}
