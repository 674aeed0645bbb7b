//! The four pipeline stages.
//!
//! Each stage either continues with a value or breaks with the reason the
//! listing was dropped. Dropping is a normal outcome, not an error.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use crate::classify::KeywordClassifier;
use crate::dedupe::DedupeState;
use crate::exclude::ExclusionFilter;
use crate::{CategoryTag, Listing, PostingDate, RawListing};

use super::DropReason;

/// Stage 1: drop false-positive titles.
pub fn exclude(filter: &ExclusionFilter, raw: &RawListing) -> ControlFlow<DropReason> {
    match filter.matched_pattern(&raw.title) {
        Some(pattern) => ControlFlow::Break(DropReason::Excluded(pattern.to_string())),
        None => ControlFlow::Continue(()),
    }
}

/// Stage 2: drop listings already seen in this run, recording new ones.
pub fn dedupe(state: &mut DedupeState, raw: &RawListing) -> ControlFlow<DropReason> {
    if state.is_duplicate(&raw.title, &raw.link) {
        ControlFlow::Break(DropReason::Duplicate)
    } else {
        ControlFlow::Continue(())
    }
}

/// Stage 3: classify the title, dropping listings with no category.
pub fn classify(
    classifier: &KeywordClassifier,
    raw: &RawListing,
) -> ControlFlow<DropReason, BTreeSet<CategoryTag>> {
    let categories = classifier.classify(&raw.title);
    if categories.is_empty() {
        ControlFlow::Break(DropReason::Uncategorized)
    } else {
        ControlFlow::Continue(categories)
    }
}

/// Stage 4: look up the posting date and build the listing.
///
/// A missing date never drops the listing. The lookup is skipped for
/// listings without a link.
pub fn enrich<F>(
    raw: &RawListing,
    categories: BTreeSet<CategoryTag>,
    date_lookup: F,
) -> ControlFlow<DropReason, Listing>
where
    F: FnOnce(&str) -> Option<PostingDate>,
{
    let posting_date = if raw.link.is_empty() {
        None
    } else {
        date_lookup(&raw.link)
    };

    if posting_date.is_none() {
        tracing::debug!(link = %raw.link, "no posting date");
    }

    match Listing::new(raw, categories, posting_date) {
        Some(listing) => ControlFlow::Continue(listing),
        None => ControlFlow::Break(DropReason::Uncategorized),
    }
}
